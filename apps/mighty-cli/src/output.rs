//! JSONL writer for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use time::format_description::well_known::Iso8601;
use time::OffsetDateTime;

use crate::error::CliError;
use crate::simulator::HandSummary;

pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl OutputWriter {
    /// Create `simulation_<utc-timestamp>.jsonl` under `output_dir`.
    pub fn new(output_dir: &Path) -> Result<Self, CliError> {
        std::fs::create_dir_all(output_dir).map_err(|e| CliError::io(output_dir, e))?;

        let stamp = OffsetDateTime::now_utc()
            .format(&Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");
        let path = output_dir.join(format!("simulation_{stamp}.jsonl"));
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| CliError::io(&path, e))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn write_hand(&mut self, summary: &HandSummary) -> Result<(), CliError> {
        let json = serde_json::to_string(summary)?;
        writeln!(self.writer, "{json}").map_err(|e| CliError::io(&self.path, e))
    }

    pub fn finish(mut self) -> Result<PathBuf, CliError> {
        self.writer
            .flush()
            .map_err(|e| CliError::io(&self.path, e))?;
        Ok(self.path)
    }
}
