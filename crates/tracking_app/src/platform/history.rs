use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;

/// The session's current page location, starting at the page it opened on.
///
/// A shareable link replaces the entry in place, like a browser history
/// replace. When a file is configured every replacement is also appended
/// there as `timestamp<TAB>url`.
pub struct LocationHistory {
    current: String,
    file: Option<PathBuf>,
}

impl LocationHistory {
    pub fn new(initial: impl Into<String>, file: Option<PathBuf>) -> Self {
        Self {
            current: initial.into(),
            file,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn replace(&mut self, url: &str) -> io::Result<()> {
        self.current = url.to_string();
        if let Some(path) = &self.file {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}\t{}", Utc::now().to_rfc3339(), url)?;
        }
        Ok(())
    }
}
