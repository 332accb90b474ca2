//! Audit log stored as a JSON-lines file.
//!
//! The containing directory is opened once through `cap_std`, so appends can
//! only ever touch the configured file name inside it. Each append opens the
//! file in append+create mode, writes the whole line with one `write_all`,
//! and closes it again. A process-wide mutex serialises that sequence.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir, fs::OpenOptions};
use tracing::debug;

use crate::domain::CreationRecord;
use crate::domain::ports::{AuditSink, AuditSinkError};

use super::encode_line;

/// File-backed [`AuditSink`].
#[derive(Clone)]
pub struct JsonLinesAuditLog {
    dir: Arc<Dir>,
    file_name: PathBuf,
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for JsonLinesAuditLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesAuditLog")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl JsonLinesAuditLog {
    /// Prepare appends to `path`. The parent directory must exist; the file
    /// is created on first append.
    ///
    /// # Errors
    ///
    /// Fails when `path` has no file name or its directory cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file_name = path.file_name().map(PathBuf::from).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("audit log path {} has no file name", path.display()),
            )
        })?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
        Ok(Self {
            dir: Arc::new(dir),
            file_name,
            path: path.to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Configured location of the log.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn append_line(dir: &Dir, file_name: &Path, lock: &Mutex<()>, line: &[u8]) -> io::Result<()> {
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    let mut file = dir.open_with(file_name, &options)?;
    file.write_all(line)?;
    file.flush()
}

#[async_trait]
impl AuditSink for JsonLinesAuditLog {
    async fn append(&self, record: &CreationRecord) -> Result<(), AuditSinkError> {
        let line = encode_line(record)?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let lock = Arc::clone(&self.write_lock);

        tokio::task::spawn_blocking(move || append_line(&dir, &file_name, &lock, &line))
            .await
            .map_err(|err| AuditSinkError::write(format!("audit writer task failed: {err}")))?
            .map_err(|err| AuditSinkError::write(format!("error writing data to file: {err}")))?;

        debug!(user_id = %record.id(), path = %self.path.display(), "audit record appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UserRecordId, UserSubmission};
    use futures::future::join_all;
    use tempfile::TempDir;

    fn record(id: i64, first_name: &str) -> CreationRecord {
        let submission = UserSubmission {
            first_name: first_name.into(),
            last_name: "Tester".into(),
            email: format!("{first_name}@example.com"),
            phone_number: "555-0100".into(),
            dob: "1990-01-01".into(),
            address: "Somewhere".into(),
        }
        .validate()
        .expect("valid submission");
        CreationRecord::new(UserRecordId::new(id), &submission)
    }

    fn read_records(dir: &TempDir) -> Vec<CreationRecord> {
        let root = Dir::open_ambient_dir(dir.path(), ambient_authority()).expect("open temp dir");
        let contents = root.read_to_string("users.json").expect("read audit log");
        contents
            .lines()
            .map(|line| serde_json::from_str(line).expect("each line is a document"))
            .collect()
    }

    #[tokio::test]
    async fn creates_file_and_appends_lines() {
        let dir = TempDir::new().expect("temp dir");
        let log = JsonLinesAuditLog::open(dir.path().join("users.json")).expect("open log");

        log.append(&record(1, "ada")).await.expect("first append");
        log.append(&record(2, "grace")).await.expect("second append");

        let records = read_records(&dir);
        assert_eq!(records, vec![record(1, "ada"), record(2, "grace")]);
    }

    #[tokio::test]
    async fn keeps_existing_contents() {
        let dir = TempDir::new().expect("temp dir");
        let root = Dir::open_ambient_dir(dir.path(), ambient_authority()).expect("open temp dir");
        root.write("users.json", b"{\"id\":0,\"full_name\":\"Seed Row\",\"email\":\"s@x\"}\n")
            .expect("seed log");
        let log = JsonLinesAuditLog::open(dir.path().join("users.json")).expect("open log");

        log.append(&record(1, "ada")).await.expect("append");

        let records = read_records(&dir);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].full_name(), "Seed Row");
        assert_eq!(records[1], record(1, "ada"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_never_interleave() {
        let dir = TempDir::new().expect("temp dir");
        let log = JsonLinesAuditLog::open(dir.path().join("users.json")).expect("open log");
        // Long names make a torn write visible as a broken line.
        let name = "x".repeat(4096);

        let appends = (0..64).map(|id| {
            let log = log.clone();
            let entry = record(id, &name);
            tokio::spawn(async move { log.append(&entry).await })
        });
        for outcome in join_all(appends).await {
            outcome.expect("task joined").expect("append succeeded");
        }

        let mut ids: Vec<i64> = read_records(&dir).iter().map(|r| r.id().get()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..64).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn missing_directory_is_reported_on_open() {
        let dir = TempDir::new().expect("temp dir");
        let err = JsonLinesAuditLog::open(dir.path().join("absent").join("users.json"))
            .expect_err("parent must exist");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn unwritable_target_surfaces_write_error() {
        let dir = TempDir::new().expect("temp dir");
        let root = Dir::open_ambient_dir(dir.path(), ambient_authority()).expect("open temp dir");
        // A directory where the log file should be cannot be opened for append.
        root.create_dir("users.json").expect("create blocking dir");
        let log = JsonLinesAuditLog::open(dir.path().join("users.json")).expect("open log");

        let err = log.append(&record(1, "ada")).await.expect_err("append must fail");

        assert!(matches!(err, AuditSinkError::Write { .. }), "got {err:?}");
    }

    #[test]
    fn rejects_paths_without_file_name() {
        let err = JsonLinesAuditLog::open("/").expect_err("root has no file name");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
