use thiserror::Error;

/// All errors that can occur while creating or loading a salt file.
#[derive(Debug, Error)]
pub enum SaltFileError {
    // --- Argument errors ---
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot resolve salt file path: {0}")]
    PathResolution(String),

    // --- Crypto errors ---
    #[error("Secure random source failed: {0}")]
    RandomSource(String),

    // --- IO errors ---
    #[error("Failed to write salt file: {0}")]
    Write(String),

    #[error("Failed to read salt file: {0}")]
    Read(String),

    #[error("Invalid salt file: {0}")]
    Validation(String),

    // --- Config errors ---
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Fieldless discriminant of [`SaltFileError`], handy for matching in
/// callers and tests without caring about the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    PathResolution,
    RandomSource,
    Write,
    Read,
    Validation,
    Config,
}

impl SaltFileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::PathResolution(_) => ErrorKind::PathResolution,
            Self::RandomSource(_) => ErrorKind::RandomSource,
            Self::Write(_) => ErrorKind::Write,
            Self::Read(_) => ErrorKind::Read,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Process exit code reported by the CLI for this error.
    ///
    /// Each kind gets its own bit so scripts can tell failures apart.
    /// `Config` uses `EX_CONFIG` from sysexits.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::InvalidArgument => 2,
            ErrorKind::PathResolution => 4,
            ErrorKind::RandomSource => 8,
            ErrorKind::Write => 16,
            ErrorKind::Read => 32,
            ErrorKind::Validation => 64,
            ErrorKind::Config => 78,
        }
    }
}

/// Convenience type alias for salt file results.
pub type Result<T> = std::result::Result<T, SaltFileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_and_nonzero() {
        let errors = [
            SaltFileError::InvalidArgument(String::new()),
            SaltFileError::PathResolution(String::new()),
            SaltFileError::RandomSource(String::new()),
            SaltFileError::Write(String::new()),
            SaltFileError::Read(String::new()),
            SaltFileError::Validation(String::new()),
            SaltFileError::Config(String::new()),
        ];

        let mut codes: Vec<i32> = errors.iter().map(SaltFileError::exit_code).collect();
        assert!(codes.iter().all(|c| *c > 0 && *c < 256));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn display_keeps_underlying_message() {
        let err = SaltFileError::Read("No such file or directory (os error 2)".into());
        assert_eq!(err.kind(), ErrorKind::Read);
        assert!(err.to_string().contains("os error 2"));
    }
}
