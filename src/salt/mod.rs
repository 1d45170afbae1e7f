//! Salt file primitives.
//!
//! - path resolution with the `<home>/.ssh/salt` default (`path`)
//! - creation and size-checked loading of 1024-byte salt files (`file`)

pub mod file;
pub mod path;

pub use file::{create_salt_file, load_salt_file, Salt, SALT_LEN};
pub use path::{default_salt_path, resolve_salt_path, FilepathArg};
