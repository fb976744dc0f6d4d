// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Error, Result, Task};

const INVALID_INDEX: &str = "Invalid task number!";

/// An ordered, exclusively-owned collection of tasks.
///
/// Insertion order is both display order and storage order. All index-taking
/// operations are bounds-checked and leave the list unchanged on failure.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty task list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a task list over an already-loaded set of tasks.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Appends a task to the end of the list.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes and returns the task at the given 0-based index.
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(Error::index(INVALID_INDEX));
        }
        Ok(self.tasks.remove(index))
    }

    /// Returns the task at the given 0-based index.
    pub fn get(&self, index: usize) -> Result<&Task> {
        self.tasks.get(index).ok_or_else(|| Error::index(INVALID_INDEX))
    }

    /// Substitutes the task at the given 0-based index, preserving order.
    pub fn replace(&mut self, index: usize, task: Task) -> Result<()> {
        let slot = self
            .tasks
            .get_mut(index)
            .ok_or_else(|| Error::index(INVALID_INDEX))?;
        *slot = task;
        Ok(())
    }

    /// Marks the task at the given 0-based index as done.
    pub fn mark(&mut self, index: usize) -> Result<()> {
        self.get_mut(index)?.mark_done();
        Ok(())
    }

    /// Marks the task at the given 0-based index as not done.
    pub fn unmark(&mut self, index: usize) -> Result<()> {
        self.get_mut(index)?.mark_undone();
        Ok(())
    }

    /// Returns tasks whose description contains the keyword,
    /// case-insensitively, in their original relative order.
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        let keyword = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.description().to_lowercase().contains(&keyword))
            .collect()
    }

    /// The number of tasks in the list.
    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates over the tasks in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Task> {
        self.tasks
            .get_mut(index)
            .ok_or_else(|| Error::index(INVALID_INDEX))
    }
}
