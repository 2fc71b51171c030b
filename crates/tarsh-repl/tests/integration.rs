//! Integration tests for the tarsh REPL.
//!
//! Each test builds a tar archive on disk, runs lines through the REPL,
//! and checks both what the user sees and the saved action log.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tar::{Builder, EntryType, Header};
use tempfile::TempDir;

use tarsh_kernel::{KernelConfig, StaticIdentity};
use tarsh_repl::{LineOutcome, Repl, EXIT_MESSAGE};

/// Archive with `file1.txt`, an empty-ish `dir1/`, and `dir1/file2.txt`.
fn build_archive(dir: &Path) -> PathBuf {
    let path = dir.join("fs.tar");
    let mut builder = Builder::new(File::create(&path).unwrap());

    append(&mut builder, "file1.txt", EntryType::Regular, b"Hello, World!\n");
    append(&mut builder, "dir1/", EntryType::Directory, b"");
    append(&mut builder, "dir1/file2.txt", EntryType::Regular, b"Content of file2.txt\n");
    append(&mut builder, "poem.txt", EntryType::Regular, b"A\nB\nC\n");

    builder.finish().unwrap();
    path
}

fn append(builder: &mut Builder<File>, path: &str, kind: EntryType, data: &[u8]) {
    let mut header = Header::new_gnu();
    header.set_entry_type(kind);
    header.set_size(data.len() as u64);
    header.set_mode(if kind.is_dir() { 0o755 } else { 0o644 });
    builder.append_data(&mut header, path, data).unwrap();
}

struct Session {
    dir: TempDir,
    repl: Repl,
}

impl Session {
    fn start() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let archive = build_archive(dir.path());
        let config = KernelConfig::new(archive, dir.path().join("log.json"))
            .with_identity(StaticIdentity::new("testuser"));
        let repl = Repl::new(config).expect("Failed to create REPL");
        Self { dir, repl }
    }

    /// Run a line and return what would be printed.
    fn run(&mut self, line: &str) -> Option<String> {
        match self.repl.process_line(line).unwrap() {
            LineOutcome::Continue(output) => output,
            LineOutcome::Exit(message) => Some(message),
        }
    }

    fn log(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(self.dir.path().join("log.json")).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}

#[test]
fn test_ls_root_lists_top_level_in_archive_order() {
    let mut s = Session::start();
    assert_eq!(s.run("ls").as_deref(), Some("file1.txt\ndir1\npoem.txt"));
}

#[test]
fn test_cd_then_ls_then_back() {
    let mut s = Session::start();
    assert_eq!(s.repl.prompt(), "/ $ ");

    assert_eq!(s.run("cd dir1"), None);
    assert_eq!(s.repl.prompt(), "dir1 $ ");
    assert_eq!(s.run("ls").as_deref(), Some("file2.txt"));

    assert_eq!(s.run("cd .."), None);
    assert_eq!(s.repl.kernel().cwd(), "/");
}

#[test]
fn test_cd_above_root() {
    let mut s = Session::start();
    assert_eq!(
        s.run("cd ..").as_deref(),
        Some("Находитесь в корневой директории, нельзя подняться выше.")
    );
    assert!(s.repl.kernel().actions().is_empty());
}

#[test]
fn test_cd_nonexistent() {
    let mut s = Session::start();
    assert_eq!(
        s.run("cd nonexistent").as_deref(),
        Some("cd: no such file or directory: nonexistent")
    );
}

#[test]
fn test_whoami_uses_injected_identity() {
    let mut s = Session::start();
    assert_eq!(s.run("whoami").as_deref(), Some("testuser"));
}

#[test]
fn test_tac_file() {
    let mut s = Session::start();
    assert_eq!(
        s.run("tac poem.txt").as_deref(),
        Some("\n--- poem.txt ---\n\nC\nB\nA")
    );
}

#[test]
fn test_tac_directory_and_missing() {
    let mut s = Session::start();
    assert_eq!(
        s.run("tac dir1").as_deref(),
        Some("Нельзя так делать: нельзя использовать tac для директории.")
    );
    assert_eq!(
        s.run("tac nonexistent.txt").as_deref(),
        Some("tac: nonexistent.txt: No such file")
    );
    assert_eq!(s.repl.kernel().cwd(), "/");
}

#[test]
fn test_unknown_and_malformed_commands() {
    let mut s = Session::start();
    assert_eq!(s.run("pwd").as_deref(), Some("pwd: command not found"));
    assert_eq!(s.run("cd").as_deref(), Some("cd: command not found"));
    assert_eq!(s.run("tac").as_deref(), Some("tac: command not found"));
    assert_eq!(s.run("   "), None);
    assert!(s.repl.kernel().actions().is_empty());
}

#[test]
fn test_exit_saves_log_in_order() {
    let mut s = Session::start();
    s.run("ls");
    s.run("cd dir1");
    s.run("cd nowhere");
    s.run("ls");
    s.run("cd ..");
    s.run("cd ..");
    s.run("whoami");
    s.run("tac file1.txt dir1 missing");
    s.run("bogus");

    assert_eq!(
        s.repl.process_line("exit").unwrap(),
        LineOutcome::Exit(EXIT_MESSAGE.to_string())
    );

    assert_eq!(
        s.log(),
        serde_json::json!([
            {"command": "ls", "output": ["file1.txt", "dir1", "poem.txt"]},
            {"command": "cd", "path": "dir1"},
            {"command": "ls", "output": ["file2.txt"]},
            {"command": "cd", "path": "/"},
            {"command": "whoami", "output": "testuser"},
            {"command": "tac", "filename": "file1.txt", "output": ["Hello, World!"]},
        ])
    );
}

#[test]
fn test_exit_with_empty_session() {
    let mut s = Session::start();
    assert_eq!(s.run("exit").as_deref(), Some("Exiting..."));
    assert_eq!(s.log(), serde_json::json!([]));
}

#[test]
fn test_no_log_before_exit() {
    let mut s = Session::start();
    s.run("ls");
    assert!(!s.dir.path().join("log.json").exists());
}

#[test]
fn test_exit_to_unwritable_log_fails() {
    let dir = tempfile::tempdir().unwrap();
    let archive = build_archive(dir.path());
    let config = KernelConfig::new(archive, dir.path().join("missing").join("log.json"))
        .with_identity(StaticIdentity::new("testuser"));
    let mut repl = Repl::new(config).unwrap();

    let err = repl.process_line("exit").unwrap_err();
    assert!(format!("{err:#}").contains("Failed to save action log"));
}

#[test]
fn test_missing_archive_fails_before_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = KernelConfig::new(dir.path().join("absent.tar"), dir.path().join("log.json"));
    assert!(Repl::new(config).is_err());
}

#[test]
fn test_symlink_archive_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.tar");
    let mut builder = Builder::new(File::create(&path).unwrap());
    let mut header = Header::new_gnu();
    header.set_entry_type(EntryType::Symlink);
    header.set_size(0);
    header.set_link_name("file1.txt").unwrap();
    builder.append_data(&mut header, "link", io::empty()).unwrap();
    builder.finish().unwrap();

    let config = KernelConfig::new(path, dir.path().join("log.json"));
    let err = Repl::new(config).err().expect("symlink should be rejected");
    assert!(format!("{err:#}").contains("unsupported entry kind"));
}
