use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::{
    STATUS_COMPLETED, STATUS_DONE, STATUS_FAILED, STATUS_PENDING, STATUS_PROCESSING,
};
use crate::error::{RegionSeekError, Result};

/// One progress sample reported for a long-running backend job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    #[serde(alias = "progress", deserialize_with = "percent_from_number")]
    pub value: i32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Percentages may arrive as floats (`37.5`); keep the integer part.
fn percent_from_number<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(raw as i32)
}

fn trim_separator(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '-')
}

impl ProgressReport {
    pub fn new(value: i32, status: &str, message: &str) -> Self {
        Self {
            value,
            status: status.to_string(),
            message: message.to_string(),
        }
    }

    /// Report for a job that has not written anything yet.
    pub fn pending() -> Self {
        Self::new(0, STATUS_PENDING, "")
    }

    /// Parse the last line of a backend progress log.
    ///
    /// Lines look like `"37.50% - processed 3/8 images"` or `"ERROR - reason"`.
    /// Anything unparseable is reported as running at 0%.
    pub fn parse_log_line(line: &str) -> Self {
        let line = line.trim();

        if line.starts_with("ERROR") {
            return Self::new(0, STATUS_FAILED, &line.replace("ERROR - ", ""));
        }

        if line.contains("100.00%") {
            let message = line.split_once('%').map_or("", |(_, rest)| trim_separator(rest));
            return Self::new(100, STATUS_COMPLETED, message);
        }

        if let Some((pct, rest)) = line.split_once('%') {
            if let Ok(value) = pct.trim().parse::<f64>() {
                return Self::new(value as i32, STATUS_PROCESSING, trim_separator(rest));
            }
        }

        Self::new(0, STATUS_PROCESSING, line)
    }

    /// Parse the full contents of a progress log. Only the last line counts.
    pub fn parse_log(text: &str) -> Self {
        match text.lines().last() {
            Some(line) => Self::parse_log_line(line),
            None => Self::pending(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Status as the tracker expects it: the backend's `completed` becomes `done`.
    pub fn normalized_status(&self) -> &str {
        if self.status == STATUS_COMPLETED {
            STATUS_DONE
        } else {
            &self.status
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == STATUS_FAILED
    }

    /// No further updates will follow.
    pub fn is_terminal(&self) -> bool {
        self.normalized_status() == STATUS_DONE || self.is_failed()
    }
}

/// Something that can be asked for the current progress of a job.
pub trait ProgressSource: Send {
    fn fetch(&mut self) -> Result<ProgressReport>;
}

/// Reads a progress log file written by the index builder.
#[derive(Clone, Debug)]
pub struct ProgressLogSource {
    path: PathBuf,
}

impl ProgressLogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressSource for ProgressLogSource {
    fn fetch(&mut self) -> Result<ProgressReport> {
        if !self.path.exists() {
            return Ok(ProgressReport::pending());
        }
        let text = std::fs::read_to_string(&self.path)?;
        Ok(ProgressReport::parse_log(&text))
    }
}

/// Replays a fixed list of reports, then keeps returning the last one.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    queue: VecDeque<ProgressReport>,
    last: Option<ProgressReport>,
}

impl ScriptedSource {
    pub fn new(reports: impl IntoIterator<Item = ProgressReport>) -> Self {
        Self {
            queue: reports.into_iter().collect(),
            last: None,
        }
    }

    /// One JSON report per non-blank line.
    pub fn from_json_lines(text: &str) -> Result<Self> {
        let reports = text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(ProgressReport::from_json)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(reports))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ProgressSource for ScriptedSource {
    fn fetch(&mut self) -> Result<ProgressReport> {
        if let Some(next) = self.queue.pop_front() {
            self.last = Some(next);
        }
        self.last
            .clone()
            .ok_or_else(|| RegionSeekError::Source("no progress reports scripted".into()))
    }
}
