// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use crate::{Error, Result};

const FORMAT_DATE_STABLE: &str = "%Y-%m-%d";
const FORMAT_TIME_STABLE: &str = "%H:%M";
const FORMAT_DATE_DISPLAY: &str = "%b %-d %Y";
const FORMAT_TIME_DISPLAY: &str = "%-I%p";

/// The time recorded for a deadline whose time segment was omitted.
///
/// The same value also suppresses time display, so a deadline explicitly due
/// at 23:59 is indistinguishable from one with no time given. This ambiguity
/// is part of the persisted format and is kept as-is.
pub(crate) fn default_due_time() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).expect("23:59 is a valid time")
}

/// A single tracked task: a description, a done flag, and a variant tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

/// The task variant and its variant-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// A plain task with no date attached.
    Todo,

    /// A task due at a calendar date, optionally with a time of day.
    Deadline { date: NaiveDate, time: NaiveTime },

    /// A task spanning a free-form start and end. Both are stored and
    /// displayed verbatim, never parsed as dates.
    Event { from: String, to: String },
}

impl Task {
    /// Creates a todo task, initially not done.
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    /// Creates a deadline task from a `"<yyyy-mm-dd>[ <HH:mm>]"` string.
    /// A missing time segment defaults to 23:59.
    pub fn deadline(description: impl Into<String>, by: &str) -> Result<Self> {
        let (date_text, time_text) = match by.split_once(' ') {
            Some((date, time)) => (date, Some(time)),
            None => (by, None),
        };

        let date =
            NaiveDate::parse_from_str(date_text, FORMAT_DATE_STABLE).map_err(|_| Error::DateFormat)?;
        let time = match time_text {
            Some(time) => {
                NaiveTime::parse_from_str(time, FORMAT_TIME_STABLE).map_err(|_| Error::DateFormat)?
            }
            None => default_due_time(),
        };

        Ok(Self::deadline_at(description, date, time))
    }

    /// Creates a deadline task from already-parsed date and time fields.
    pub fn deadline_at(description: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { date, time },
        }
    }

    /// Creates an event task with verbatim start and end text.
    pub fn event(
        description: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event {
                from: from.into(),
                to: to.into(),
            },
        }
    }

    /// The task description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the task has been marked done.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The task variant and its fields.
    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Marks the task as done. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the task as not done. Idempotent.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Renders the task as a pipe-delimited record for persistence.
    ///
    /// - `T | <0|1> | <description>`
    /// - `D | <0|1> | <description> | <yyyy-mm-dd> <HH:mm>`
    /// - `E | <0|1> | <description> | <from> | <to>`
    ///
    /// The delimiter is not escaped. A `|` inside a description or event
    /// field is written as-is and reads back as extra fields, truncating
    /// the value at the first `|`. Known limitation of the file format.
    pub fn to_record(&self) -> String {
        let done = i32::from(self.done);
        match &self.kind {
            TaskKind::Todo => format!("T | {done} | {}", self.description),
            TaskKind::Deadline { date, time } => format!(
                "D | {done} | {} | {} {}",
                self.description,
                date.format(FORMAT_DATE_STABLE),
                time.format(FORMAT_TIME_STABLE),
            ),
            TaskKind::Event { from, to } => {
                format!("E | {done} | {} | {from} | {to}", self.description)
            }
        }
    }
}

impl fmt::Display for Task {
    /// Renders the task for display, e.g. `[D][X] report (by: Oct 10 2023 3PM)`.
    ///
    /// The deadline time segment is omitted exactly when the stored time is
    /// 23:59, the value used for "no time given".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.done { 'X' } else { ' ' };
        match &self.kind {
            TaskKind::Todo => write!(f, "[T][{status}] {}", self.description),
            TaskKind::Deadline { date, time } => {
                write!(
                    f,
                    "[D][{status}] {} (by: {}",
                    self.description,
                    date.format(FORMAT_DATE_DISPLAY),
                )?;
                if *time != default_due_time() {
                    write!(f, " {}", time.format(FORMAT_TIME_DISPLAY))?;
                }
                write!(f, ")")
            }
            TaskKind::Event { from, to } => {
                write!(f, "[E][{status}] {} (from: {from} to: {to})", self.description)
            }
        }
    }
}
