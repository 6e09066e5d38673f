//! Append-only JSONL log file.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::LogEntry;

/// Appends entries to `logs/<date>_<app>.jsonl`.
pub struct LogWriter {
    app: String,
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl LogWriter {
    pub fn new(logs_dir: impl AsRef<Path>, app: impl Into<String>) -> std::io::Result<Self> {
        let app = app.into();
        let logs_dir = logs_dir.as_ref();
        fs::create_dir_all(logs_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = logs_dir.join(format!("{}_{}.jsonl", date, app));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            app,
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry as a single line and flush.
    pub fn write(&self, entry: &LogEntry) -> std::io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.writer.lock().flush();
    }
}

/// Read every entry from a JSONL file, skipping unparsable lines.
pub fn read_entries(path: impl AsRef<Path>) -> std::io::Result<Vec<LogEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| LogEntry::from_json_line(l).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_back() {
        let temp = TempDir::new().unwrap();
        let writer = LogWriter::new(temp.path(), "desktop").unwrap();

        writer
            .write(&LogEntry::new("info", "desktop", "gymcoach", "first"))
            .unwrap();
        writer
            .write(&LogEntry::new("warn", "desktop", "gymcoach", "second"))
            .unwrap();

        let entries = read_entries(writer.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].level, "warn");
        assert!(writer
            .path()
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap()
            .ends_with("_desktop.jsonl"));
    }
}
