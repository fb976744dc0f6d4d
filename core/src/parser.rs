// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Pure parsing of command arguments into structured fields.
//!
//! Nothing in this module touches the task list or the file system; every
//! function takes text in and returns validated fields or an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// Matches an edit-command field marker: `/desc`, `/by`, `/from`, or `/to`
/// followed by whitespace or end of input.
static EDIT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(desc|by|from|to)(?:\s+|$)").expect("marker pattern is valid"));

/// Parses a 1-based task index and converts it to a 0-based one, validated
/// against the current task count.
pub fn parse_index(text: &str, count: usize) -> Result<usize> {
    let index = text
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::index("Please enter a valid task number"))?
        - 1;

    match usize::try_from(index) {
        Ok(index) if index < count => Ok(index),
        _ => Err(Error::index(format!("Invalid task number! Use 1-{count}"))),
    }
}

/// Splits deadline arguments on the first `/by` into a description and a
/// date/time string. Both sides must be non-empty after trimming.
pub fn parse_deadline_args(text: &str) -> Result<(String, String)> {
    const USAGE: &str = "Invalid deadline format! Use: deadline <description> /by <date> <time>";

    let (description, by) = text.split_once("/by").ok_or_else(|| Error::format(USAGE))?;
    let (description, by) = (description.trim(), by.trim());
    if description.is_empty() || by.is_empty() {
        return Err(Error::format(USAGE));
    }

    Ok((description.to_string(), by.to_string()))
}

/// Splits event arguments on the first `/from` and then the first `/to` into
/// a description, a start, and an end. Only the first occurrence of each
/// delimiter is significant, so the end text may itself contain "to".
pub fn parse_event_args(text: &str) -> Result<(String, String, String)> {
    const USAGE: &str = "Invalid event format! Use: event <description> /from <start> /to <end>";

    let (description, rest) = text.split_once("/from").ok_or_else(|| Error::format(USAGE))?;
    let (from, to) = rest.split_once("/to").ok_or_else(|| Error::format(USAGE))?;

    Ok((
        description.trim().to_string(),
        from.trim().to_string(),
        to.trim().to_string(),
    ))
}

/// Field updates parsed from an edit command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditArgs {
    /// The 0-based index of the task to edit.
    pub index: usize,

    /// Replacement description, applicable to every task variant.
    pub description: Option<String>,

    /// Replacement due date/time text, applicable to deadlines.
    pub by: Option<String>,

    /// Replacement start text, applicable to events.
    pub from: Option<String>,

    /// Replacement end text, applicable to events.
    pub to: Option<String>,
}

/// Parses edit arguments: a leading 1-based index followed by one or more
/// `/desc`, `/by`, `/from`, `/to` markers, each capturing the text up to the
/// next marker or end of input.
///
/// A repeated marker keeps its last occurrence, and a marker with an empty
/// value is dropped. Marker tokens are not escapable: one appearing as plain
/// text inside a field value starts a new field. At least one field must
/// survive, otherwise the edit would change nothing.
pub fn parse_edit_args(text: &str) -> Result<EditArgs> {
    let text = text.trim();
    let (head, rest) = match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest),
        None => (text, ""),
    };

    let index = head
        .parse::<i64>()
        .map_err(|_| Error::format("Invalid task number format!"))?
        - 1;
    let index =
        usize::try_from(index).map_err(|_| Error::index("Invalid task number!"))?;

    let mut args = EditArgs {
        index,
        description: None,
        by: None,
        from: None,
        to: None,
    };

    let markers: Vec<_> = EDIT_MARKER.captures_iter(rest).collect();
    for (i, capture) in markers.iter().enumerate() {
        let matched = capture.get(0).expect("capture 0 always exists");
        let end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(rest.len(), |next| next.start());

        let value = rest[matched.end()..end].trim();
        if value.is_empty() {
            continue;
        }

        let field = match &capture[1] {
            "desc" => &mut args.description,
            "by" => &mut args.by,
            "from" => &mut args.from,
            "to" => &mut args.to,
            _ => unreachable!(),
        };
        *field = Some(value.to_string());
    }

    if args.description.is_none() && args.by.is_none() && args.from.is_none() && args.to.is_none() {
        return Err(Error::format(
            "No fields to update! Use at least one of: /desc, /by, /from, /to",
        ));
    }

    Ok(args)
}
