//! Archive loader — builds the snapshot VFS from a tar archive.
//!
//! Regular files become [`Entry::File`] with their bytes decoded as UTF-8;
//! directories become [`Entry::Directory`] with any trailing slash removed
//! from the key. A pax global header (as written by `git archive`) carries
//! only metadata and is skipped. Every other entry kind is rejected so a
//! symlink or device node is never mistaken for a file.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use tar::{Archive, EntryType as TarEntryType};
use thiserror::Error;

use crate::vfs::{Entry, SnapshotFs};

/// Errors that prevent a snapshot from being built.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("cannot open archive {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read archive: {0}")]
    Read(#[from] io::Error),

    #[error("archive entry has a non-UTF-8 path: {0}")]
    InvalidPath(String),

    #[error("{path}: content is not valid UTF-8 text")]
    InvalidUtf8 { path: String },

    #[error("{path}: unsupported entry kind ({kind})")]
    UnsupportedEntry { path: String, kind: String },
}

/// Load a snapshot from a tar archive on disk.
#[tracing::instrument(level = "info", skip(path), fields(archive = %path.display()), err)]
pub fn load_archive(path: &Path) -> Result<SnapshotFs, ArchiveError> {
    let file = File::open(path).map_err(|source| ArchiveError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let fs = load_from_reader(BufReader::new(file))?;
    tracing::info!(entries = fs.len(), "archive loaded");
    Ok(fs)
}

/// Load a snapshot from any reader yielding a tar stream.
pub fn load_from_reader<R: Read>(reader: R) -> Result<SnapshotFs, ArchiveError> {
    let mut archive = Archive::new(reader);
    let mut fs = SnapshotFs::new();

    for entry in archive.entries()? {
        let mut entry = entry?;
        let path = {
            let raw = entry.path_bytes();
            String::from_utf8(raw.to_vec())
                .map_err(|_| ArchiveError::InvalidPath(String::from_utf8_lossy(&raw).into_owned()))?
        };
        let kind = entry.header().entry_type();

        match kind {
            // Old-style archives mark directories as regular files with a
            // trailing slash.
            TarEntryType::Regular if path.ends_with('/') => {
                insert_dir(&mut fs, &path);
            }
            TarEntryType::Regular | TarEntryType::Continuous => {
                let mut data = Vec::new();
                entry.read_to_end(&mut data)?;
                let content =
                    String::from_utf8(data).map_err(|_| ArchiveError::InvalidUtf8 { path: path.clone() })?;
                tracing::debug!(path = %path, bytes = content.len(), "file");
                fs.insert(path, Entry::file(content));
            }
            TarEntryType::Directory => insert_dir(&mut fs, &path),
            TarEntryType::XGlobalHeader => {
                tracing::trace!(path = %path, "skipping pax global header");
            }
            other => {
                return Err(ArchiveError::UnsupportedEntry {
                    path,
                    kind: format!("{other:?}"),
                });
            }
        }
    }

    Ok(fs)
}

fn insert_dir(fs: &mut SnapshotFs, path: &str) {
    let key = match path.trim_end_matches('/') {
        "" => path,
        trimmed => trimmed,
    };
    tracing::debug!(path = %key, "directory");
    fs.insert(key, Entry::Directory);
}
