use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::AppResult;
use crate::models::mood_log::{MoodLogEntry, TrendPoint};

/// Append-only CSV mood log: `timestamp,mood,sentiment`.
///
/// Appends from this process are serialized; concurrent writers in other
/// processes are not coordinated.
#[derive(Debug)]
pub struct MoodLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl MoodLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Opens (creating if needed) and appends one row. The header is written
    /// only when the file is empty; existing rows are never rewritten.
    pub fn append(&self, entry: &MoodLogEntry) -> AppResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(entry)?;
        writer.flush()?;

        tracing::debug!(
            path = %self.path.display(),
            sentiment = entry.sentiment,
            header_written = needs_header,
            "Mood log entry appended"
        );
        Ok(())
    }

    /// All entries in write order, or `None` if the log does not exist yet.
    pub fn entries(&self) -> AppResult<Option<Vec<MoodLogEntry>>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(file);
        let entries = reader
            .deserialize()
            .collect::<Result<Vec<MoodLogEntry>, csv::Error>>()?;

        Ok(Some(entries))
    }

    /// Sentiment over time sorted ascending by timestamp, regardless of file
    /// order. `None` if the log does not exist yet.
    pub fn trend(&self) -> AppResult<Option<Vec<TrendPoint>>> {
        Ok(self.entries()?.map(|entries| {
            let mut points: Vec<TrendPoint> = entries.iter().map(TrendPoint::from).collect();
            points.sort_by_key(|p| p.timestamp);
            points
        }))
    }

    /// Whether an append would be able to open the file.
    pub fn is_writable(&self) -> bool {
        match fs::metadata(&self.path) {
            Ok(meta) => meta.is_file() && !meta.permissions().readonly(),
            Err(_) => {
                let parent = self
                    .path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."));
                fs::metadata(parent)
                    .map(|m| m.is_dir() && !m.permissions().readonly())
                    .unwrap_or(false)
            }
        }
    }
}
