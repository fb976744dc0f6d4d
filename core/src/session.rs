// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::parser::{self, EditArgs};
use crate::{Config, Error, Result, Storage, Task, TaskKind, TaskList};

const GREETING: &str = "Hello! I'm TaskPal, your friendly task manager!\nWhat can I do for you?";
const FAREWELL: &str = "Bye. Hope to see you again soon!";
const LOAD_WARNING: &str = "Error loading tasks from file. Starting with an empty task list.";

/// A single-user task-tracking session.
///
/// Commands are handled one at a time: parsed, applied to the in-memory
/// list, then written through to the data file before the response is
/// returned. A failed command leaves both the list and the file unchanged.
#[derive(Debug)]
pub struct Session {
    tasks: TaskList,
    storage: Storage,
    load_warning: Option<&'static str>,
}

impl Session {
    /// Opens a session over the configured data file. A file that exists but
    /// cannot be loaded downgrades to an empty list plus a warning carried
    /// into the greeting; it never aborts the session.
    pub fn new(config: &Config) -> Self {
        let storage = Storage::new(&config.data_path);
        let (tasks, load_warning) = match storage.load() {
            Ok(tasks) => (TaskList::from_tasks(tasks), None),
            Err(e) => {
                tracing::warn!(path = %storage.path().display(), error = %e, "failed to load tasks");
                (TaskList::new(), Some(LOAD_WARNING))
            }
        };

        Self {
            tasks,
            storage,
            load_warning,
        }
    }

    /// The welcome message, including any load warning.
    pub fn greet(&self) -> String {
        match self.load_warning {
            Some(warning) => format!("{GREETING}\n{warning}"),
            None => GREETING.to_string(),
        }
    }

    /// Handles one command line and returns the response text. Errors are
    /// converted to `Error: <message>` responses; none of them end the
    /// session.
    pub fn handle(&mut self, line: &str) -> String {
        match self.dispatch(line) {
            Ok(response) => response,
            Err(e) => format!("Error: {e}"),
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<String> {
        let line = line.trim();
        let (command, arguments) = match line.split_once(char::is_whitespace) {
            Some((command, arguments)) => (command, arguments.trim()),
            None => (line, ""),
        };

        tracing::debug!(command, "handling command");
        match command.to_lowercase().as_str() {
            "bye" => self.handle_bye(),
            "list" => self.handle_list(),
            "mark" => self.handle_mark(arguments),
            "unmark" => self.handle_unmark(arguments),
            "delete" => self.handle_delete(arguments),
            "todo" => self.handle_todo(arguments),
            "deadline" => self.handle_deadline(arguments),
            "event" => self.handle_event(arguments),
            "find" => self.handle_find(arguments),
            "edit" => self.handle_edit(arguments),
            _ => Err(Error::UnknownCommand),
        }
    }

    fn handle_bye(&mut self) -> Result<String> {
        self.storage.save(&self.tasks)?;
        Ok(FAREWELL.to_string())
    }

    fn handle_list(&self) -> Result<String> {
        if self.tasks.is_empty() {
            return Ok("Your task list is empty!".to_string());
        }
        Ok(format!(
            "Here are the tasks in your list:\n{}",
            numbered(self.tasks.iter())
        ))
    }

    fn handle_mark(&mut self, arguments: &str) -> Result<String> {
        let index = parser::parse_index(arguments, self.tasks.size())?;
        self.tasks.mark(index)?;
        self.storage.save(&self.tasks)?;
        Ok(format!(
            "Nice! I've marked this task as done:\n  {}",
            self.tasks.get(index)?
        ))
    }

    fn handle_unmark(&mut self, arguments: &str) -> Result<String> {
        let index = parser::parse_index(arguments, self.tasks.size())?;
        self.tasks.unmark(index)?;
        self.storage.save(&self.tasks)?;
        Ok(format!(
            "OK, I've marked this task as not done yet:\n  {}",
            self.tasks.get(index)?
        ))
    }

    fn handle_delete(&mut self, arguments: &str) -> Result<String> {
        let index = parser::parse_index(arguments, self.tasks.size())?;
        let removed = self.tasks.delete(index)?;
        self.storage.save(&self.tasks)?;
        Ok(format!(
            "Noted. I've removed this task:\n  {removed}\nNow you have {} tasks in the list.",
            self.tasks.size()
        ))
    }

    fn handle_todo(&mut self, arguments: &str) -> Result<String> {
        if arguments.is_empty() {
            return Err(Error::format("Todo description cannot be empty!"));
        }
        self.add_and_save(Task::todo(arguments))
    }

    fn handle_deadline(&mut self, arguments: &str) -> Result<String> {
        let (description, by) = parser::parse_deadline_args(arguments)?;
        self.add_and_save(Task::deadline(description, &by)?)
    }

    fn handle_event(&mut self, arguments: &str) -> Result<String> {
        let (description, from, to) = parser::parse_event_args(arguments)?;
        self.add_and_save(Task::event(description, from, to))
    }

    fn handle_find(&self, arguments: &str) -> Result<String> {
        if arguments.is_empty() {
            return Err(Error::format("Please specify a search keyword!"));
        }

        let matches = self.tasks.find(arguments);
        if matches.is_empty() {
            return Ok("No tasks found matching your search.".to_string());
        }
        Ok(format!(
            "Here are the matching tasks in your list:\n{}",
            numbered(matches.into_iter())
        ))
    }

    fn handle_edit(&mut self, arguments: &str) -> Result<String> {
        let edit = parser::parse_edit_args(arguments)?;
        let updated = rebuild_task(self.tasks.get(edit.index)?, &edit)?;
        self.tasks.replace(edit.index, updated)?;
        self.storage.save(&self.tasks)?;
        Ok(format!(
            "Task updated successfully!\n    {}",
            self.tasks.get(edit.index)?
        ))
    }

    fn add_and_save(&mut self, task: Task) -> Result<String> {
        self.tasks.add(task);
        self.storage.save(&self.tasks)?;

        let task = self.tasks.get(self.tasks.size() - 1)?;
        Ok(format!(
            "Got it. I've added this task:\n  {task}\nNow you have {} tasks in the list.",
            self.tasks.size()
        ))
    }
}

/// Builds the edited replacement for a task. `/desc` applies to every
/// variant, `/by` only to deadlines, `/from` and `/to` only to events;
/// inapplicable markers are ignored. The replacement starts unmarked.
fn rebuild_task(original: &Task, edit: &EditArgs) -> Result<Task> {
    let description = edit
        .description
        .clone()
        .unwrap_or_else(|| original.description().to_string());

    Ok(match original.kind() {
        TaskKind::Todo => Task::todo(description),
        TaskKind::Deadline { date, time } => match &edit.by {
            Some(by) => Task::deadline(description, by)?,
            None => Task::deadline_at(description, *date, *time),
        },
        TaskKind::Event { from, to } => Task::event(
            description,
            edit.from.clone().unwrap_or_else(|| from.clone()),
            edit.to.clone().unwrap_or_else(|| to.clone()),
        ),
    })
}

fn numbered<'a>(tasks: impl Iterator<Item = &'a Task>) -> String {
    tasks
        .enumerate()
        .map(|(i, task)| format!("{}.{task}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
