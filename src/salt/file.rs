//! Creating and loading salt files.
//!
//! A salt file holds exactly [`SALT_LEN`] random bytes. It is written with
//! owner-only permissions and read back with a strict length check.
//!
//! Writes are not atomic: a failed write may leave no file, a truncated
//! file, or the previous contents, depending on the filesystem.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use rand::TryRngCore;
use tracing::Level;
use zeroize::Zeroizing;

use crate::errors::{Result, SaltFileError};
use crate::logging::{LogRecord, Logger};
use crate::salt::path::{resolve_salt_path, FilepathArg};

/// Length of a salt file in bytes.
pub const SALT_LEN: usize = 1024;

/// Salt bytes loaded from disk. Wiped from memory on drop.
pub struct Salt {
    bytes: Zeroizing<Vec<u8>>,
}

impl Salt {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Salt {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt([REDACTED; {} bytes])", self.bytes.len())
    }
}

/// Generate a new salt and write it to the resolved `filepath`.
///
/// Creates or truncates the file. On Unix the file ends up with mode
/// 0600 even when it already existed with looser permissions. Parent
/// directories are not created.
pub fn create_salt_file(filepath: &FilepathArg, logger: &dyn Logger) -> Result<()> {
    const FUNCTION_NAME: &str = "create_salt_file";

    logger.log(&LogRecord::new(
        Level::DEBUG,
        FUNCTION_NAME,
        format!("received: filepath={filepath:?}"),
    ));

    let result = resolve_salt_path(filepath).and_then(|path| write_new_salt(&path));

    report(logger, FUNCTION_NAME, &result);
    result
}

/// Load the salt stored at the resolved `filepath`.
///
/// Fails with `Read` when the file cannot be read and with `Validation`
/// when it is not exactly [`SALT_LEN`] bytes long.
pub fn load_salt_file(filepath: &FilepathArg, logger: &dyn Logger) -> Result<Salt> {
    const FUNCTION_NAME: &str = "load_salt_file";

    logger.log(&LogRecord::new(
        Level::DEBUG,
        FUNCTION_NAME,
        format!("received: filepath={filepath:?}"),
    ));

    let result = resolve_salt_path(filepath).and_then(|path| read_salt(&path));

    // Only the status code is reported; the salt itself stays out of logs.
    report(logger, FUNCTION_NAME, &result);
    result
}

fn write_new_salt(path: &Path) -> Result<()> {
    let mut salt = Zeroizing::new(vec![0u8; SALT_LEN]);
    rand::rngs::OsRng
        .try_fill_bytes(salt.as_mut_slice())
        .map_err(|e| SaltFileError::RandomSource(e.to_string()))?;

    write_owner_only(path, &salt)
}

fn write_owner_only(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |e: std::io::Error| SaltFileError::Write(format!("{}: {e}", path.display()));

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(write_err)?;

    // `mode` only applies to newly created files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(write_err)?;
    }

    file.write_all(bytes).map_err(write_err)
}

fn read_salt(path: &Path) -> Result<Salt> {
    let read_err = |e: std::io::Error| SaltFileError::Read(format!("{}: {e}", path.display()));

    // One byte past SALT_LEN is enough to tell an oversized file apart,
    // and keeps memory bounded for huge or endless files.
    let mut bytes = Zeroizing::new(Vec::with_capacity(SALT_LEN + 1));
    File::open(path)
        .map_err(read_err)?
        .take(SALT_LEN as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(read_err)?;

    match bytes.len() {
        SALT_LEN => Ok(Salt { bytes }),
        len if len > SALT_LEN => Err(SaltFileError::Validation(format!(
            "{} must be exactly {SALT_LEN} bytes, got more",
            path.display()
        ))),
        len => Err(SaltFileError::Validation(format!(
            "{} must be exactly {SALT_LEN} bytes, got {len}",
            path.display()
        ))),
    }
}

fn report<T>(logger: &dyn Logger, function: &str, result: &Result<T>) {
    let code = match result {
        Ok(_) => 0,
        Err(e) => {
            logger.log(&LogRecord::new(Level::ERROR, function, e.to_string()));
            e.exit_code()
        }
    };

    logger.log(&LogRecord::new(
        Level::DEBUG,
        function,
        format!("returned code: {code}"),
    ));
}
