// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result, Task, TaskList};

const TYPE_TODO: &str = "T";
const TYPE_DEADLINE: &str = "D";
const TYPE_EVENT: &str = "E";

const DONE: &str = "1";

const MIN_TODO_FIELDS: usize = 3;
const MIN_DEADLINE_FIELDS: usize = 4;
const MIN_EVENT_FIELDS: usize = 5;

/// Reads and writes the task list as a line-oriented, pipe-delimited text
/// file. One record per task, whitespace around delimiters insignificant.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a storage handle over the given data-file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing data-file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all tasks from the data file.
    ///
    /// A missing file yields an empty list. Lines with fewer than three
    /// fields or an unrecognized type tag are skipped; a recognized tag with
    /// too few fields for its type, or an unparsable deadline date, fails the
    /// whole load.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no data file, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| Error::storage("Error loading tasks from file", e))?;

        let mut tasks = Vec::new();
        for line in content.lines() {
            if let Some(task) = parse_record(line)? {
                tasks.push(task);
            }
        }

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Saves all tasks to the data file, creating parent directories when
    /// absent and overwriting any previous contents.
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| Error::storage("Error saving tasks to file", e))?;
        }

        let mut content = String::new();
        for task in tasks.iter() {
            content.push_str(&task.to_record());
            content.push('\n');
        }

        fs::write(&self.path, content)
            .map_err(|e| Error::storage("Error saving tasks to file", e))
    }
}

/// Parses a single stored line. Returns `Ok(None)` for lines to skip: blank
/// lines, lines with fewer than three fields, and unrecognized type tags.
fn parse_record(line: &str) -> Result<Option<Task>> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() < MIN_TODO_FIELDS {
        return Ok(None);
    }

    let done = fields[1] == DONE;
    let description = fields[2];

    let mut task = match fields[0] {
        TYPE_TODO => {
            if description.is_empty() {
                return Err(Error::format("Invalid todo format"));
            }
            Task::todo(description)
        }
        TYPE_DEADLINE => {
            if fields.len() < MIN_DEADLINE_FIELDS {
                return Err(Error::format("Invalid deadline format"));
            }
            Task::deadline(description, fields[3])?
        }
        TYPE_EVENT => {
            if fields.len() < MIN_EVENT_FIELDS {
                return Err(Error::format("Invalid event format"));
            }
            Task::event(description, fields[3], fields[4])
        }
        tag => {
            tracing::debug!(tag, "skipping record with unrecognized type tag");
            return Ok(None);
        }
    };

    if done {
        task.mark_done();
    }
    Ok(Some(task))
}
