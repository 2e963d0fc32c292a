//! FileSystem abstraction for testable file operations

mod dry_run;
mod mock;
mod real;
mod r#trait;

pub use dry_run::DryRunFileSystem;
pub use mock::MockFileSystem;
pub use r#trait::{DirEntry, FileSystem, FileType};
pub use real::RealFileSystem;
