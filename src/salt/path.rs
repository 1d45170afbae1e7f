//! Resolution of the salt file location.
//!
//! Callers hand in a [`FilepathArg`]: nothing, a path, or some other value
//! that came from an untyped source such as a TOML config or a JSON
//! payload. Resolution never touches the filesystem.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{Result, SaltFileError};

/// The filepath parameter of a salt file operation, as received.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FilepathArg {
    /// No path given; use `<home>/.ssh/salt`.
    #[default]
    Absent,
    /// An explicit path, used as-is.
    Path(PathBuf),
    /// A non-string value. Always rejected with `InvalidArgument`.
    Other(serde_json::Value),
}

impl From<PathBuf> for FilepathArg {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for FilepathArg {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<&str> for FilepathArg {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl<T: Into<FilepathArg>> From<Option<T>> for FilepathArg {
    fn from(path: Option<T>) -> Self {
        path.map_or(Self::Absent, Into::into)
    }
}

/// Return the effective salt file path for `filepath`.
pub fn resolve_salt_path(filepath: &FilepathArg) -> Result<PathBuf> {
    match filepath {
        FilepathArg::Absent => default_salt_path(),
        FilepathArg::Path(path) if path.as_os_str().is_empty() => Err(
            SaltFileError::InvalidArgument("param \"filepath\" is an empty path".into()),
        ),
        FilepathArg::Path(path) => Ok(path.clone()),
        FilepathArg::Other(value) => Err(SaltFileError::InvalidArgument(format!(
            "param \"filepath\" is not a string (got {})",
            json_type_name(value)
        ))),
    }
}

/// Default salt file location: `<home>/.ssh/salt`.
pub fn default_salt_path() -> Result<PathBuf> {
    default_salt_path_in(dirs::home_dir())
}

fn default_salt_path_in(home: Option<PathBuf>) -> Result<PathBuf> {
    let home = home.ok_or_else(|| {
        SaltFileError::PathResolution("cannot determine the home directory".into())
    })?;
    Ok(home.join(".ssh").join("salt"))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use serde_json::json;

    #[test]
    fn explicit_path_is_returned_unchanged() {
        let arg = FilepathArg::from("some/../relative/salt");
        assert_eq!(
            resolve_salt_path(&arg).unwrap(),
            PathBuf::from("some/../relative/salt")
        );
    }

    #[test]
    fn default_path_is_under_home_ssh() {
        let path = default_salt_path_in(Some(PathBuf::from("/home/user"))).unwrap();
        assert_eq!(path, PathBuf::from("/home/user/.ssh/salt"));
    }

    #[test]
    fn missing_home_is_a_resolution_error() {
        let err = default_salt_path_in(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PathResolution);
    }

    #[test]
    fn absent_resolves_to_default_path() {
        if let Ok(default) = default_salt_path() {
            assert_eq!(resolve_salt_path(&FilepathArg::Absent).unwrap(), default);
            assert_eq!(resolve_salt_path(&None::<PathBuf>.into()).unwrap(), default);
        }
    }

    #[test]
    fn non_string_values_are_invalid_arguments() {
        for value in [json!(42), json!({ "path": "/tmp/salt" }), json!([1, 2]), json!(true)] {
            let err = resolve_salt_path(&FilepathArg::Other(value)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn empty_path_is_an_invalid_argument() {
        let err = resolve_salt_path(&FilepathArg::from("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn deserializes_from_json() {
        let arg: FilepathArg = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(arg, FilepathArg::Absent);

        let arg: FilepathArg = serde_json::from_value(json!("/tmp/salt")).unwrap();
        assert_eq!(arg, FilepathArg::Path(PathBuf::from("/tmp/salt")));

        let arg: FilepathArg = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(arg, FilepathArg::Other(json!(42)));
    }
}
