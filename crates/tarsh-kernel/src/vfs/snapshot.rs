//! In-memory snapshot filesystem.

use std::borrow::Cow;

use indexmap::IndexMap;

/// Message printed by `ls` when the current directory has no children.
pub const NO_FILES: &str = "No files found.";

/// Entry in the snapshot filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Regular file with its decoded text.
    File { content: String },
    /// Directory marker. Holds nothing.
    Directory,
}

impl Entry {
    /// Create a file entry.
    pub fn file(content: impl Into<String>) -> Self {
        Entry::File {
            content: content.into(),
        }
    }
}

/// Read-only filesystem built from an archive.
///
/// Keys are the archive paths exactly as loaded; there is no normalization
/// beyond what the loader applies. Once built, the snapshot is never
/// mutated and is shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct SnapshotFs {
    entries: IndexMap<String, Entry>,
}

impl SnapshotFs {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry during loading.
    ///
    /// A repeated path keeps its original position and takes the newer entry.
    pub(crate) fn insert(&mut self, path: impl Into<String>, entry: Entry) {
        self.entries.insert(path.into(), entry);
    }

    pub fn get(&self, path: &str) -> Option<&Entry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All paths in archive order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Direct children of `cwd`, in archive order.
    ///
    /// At the root, a path is a child when it has no `/` after its leading
    /// slashes and is reported as-is. Elsewhere, a path is a child when it
    /// starts with `cwd/` and the remainder, trimmed of slashes, has no
    /// further `/`; the remainder is what gets reported.
    pub fn list(&self, cwd: &str) -> Vec<String> {
        let dir: Cow<'_, str> = if cwd.ends_with('/') {
            Cow::Borrowed(cwd)
        } else {
            Cow::Owned(format!("{cwd}/"))
        };

        let mut names = Vec::new();
        for path in self.entries.keys() {
            if dir == "/" && !path.trim_start_matches('/').contains('/') {
                names.push(path.clone());
            } else if let Some(rest) = path.strip_prefix(dir.as_ref())
                && !rest.trim_matches('/').contains('/')
            {
                names.push(rest.to_string());
            }
        }
        names
    }
}

impl<S: Into<String>> FromIterator<(S, Entry)> for SnapshotFs {
    fn from_iter<I: IntoIterator<Item = (S, Entry)>>(iter: I) -> Self {
        let mut fs = SnapshotFs::new();
        for (path, entry) in iter {
            fs.insert(path, entry);
        }
        fs
    }
}
