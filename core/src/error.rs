// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use thiserror::Error;

/// Errors surfaced by command parsing, task-list mutation, and persistence.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed command arguments, such as a missing delimiter or an empty
    /// required field.
    #[error("{0}")]
    Format(String),

    /// A task index that is out of bounds or not a number.
    #[error("{0}")]
    Index(String),

    /// A deadline date or time that failed to parse.
    #[error("Invalid date/time format. Expected format: yyyy-mm-dd [HH:mm]")]
    DateFormat,

    /// The backing file could not be read or written.
    #[error("{message}")]
    Storage {
        message: String,
        #[source]
        source: io::Error,
    },

    /// An unrecognized leading command token.
    #[error("I don't understand that command!")]
    UnknownCommand,
}

/// Result alias for operations that fail with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    pub(crate) fn index(message: impl Into<String>) -> Self {
        Self::Index(message.into())
    }

    pub(crate) fn storage(message: impl Into<String>, source: io::Error) -> Self {
        Self::Storage {
            message: message.into(),
            source,
        }
    }
}
