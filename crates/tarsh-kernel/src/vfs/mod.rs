//! Virtual Filesystem (VFS) for tarsh.
//!
//! The VFS is a flat, read-only mapping from archive path to entry. It is
//! materialized once from a tar snapshot (see [`crate::archive`]) and shared
//! by every tool for the lifetime of a session.
//!
//! # Design
//!
//! Directories are markers, not tree nodes. A path is a child of a
//! directory purely by string prefix, so a file can exist under a
//! directory that has no entry of its own:
//!
//! ```text
//! file1.txt          File
//! dir1               Directory
//! dir1/file2.txt     File
//! orphan/notes.txt   File  (no "orphan" entry)
//! ```
//!
//! Iteration follows archive order, which is also the order `ls` reports.

mod snapshot;

pub use snapshot::{Entry, SnapshotFs, NO_FILES};
