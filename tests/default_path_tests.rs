//! Default salt location, exercised through both operations.
//!
//! Kept in its own test binary with a single test because it points
//! `HOME` at a temp dir for the whole process.

use std::fs;

use saltfile::errors::ErrorKind;
use saltfile::logging::NoopLogger;
use saltfile::salt::{create_salt_file, load_salt_file, FilepathArg, SALT_LEN};
use tempfile::TempDir;

#[cfg(unix)]
#[test]
fn absent_filepath_creates_and_loads_home_ssh_salt() {
    let home = TempDir::new().unwrap();
    std::env::set_var("HOME", home.path());
    let salt_path = home.path().join(".ssh").join("salt");

    // Without ~/.ssh the default path cannot be written.
    let err = create_salt_file(&FilepathArg::Absent, &NoopLogger).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Write);

    fs::create_dir(home.path().join(".ssh")).unwrap();
    let err = load_salt_file(&FilepathArg::Absent, &NoopLogger).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Read);

    create_salt_file(&FilepathArg::Absent, &NoopLogger).unwrap();
    assert_eq!(fs::metadata(&salt_path).unwrap().len(), SALT_LEN as u64);

    let salt = load_salt_file(&FilepathArg::Absent, &NoopLogger).unwrap();
    assert_eq!(salt.as_bytes(), fs::read(&salt_path).unwrap().as_slice());
}
