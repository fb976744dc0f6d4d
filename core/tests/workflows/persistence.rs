// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Persistence workflow tests.
//!
//! These tests validate that every mutation reaches the data file and that a
//! fresh session sees exactly what the previous one left behind.

use std::fs;

use tempfile::TempDir;

use taskpal_core::{Config, Session, Storage, Task, TaskList};

fn config_in(dir: &TempDir) -> Config {
    Config {
        data_path: dir.path().join("tasks.txt"),
    }
}

#[test]
fn tasks_survive_a_restart() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    // Act - first session adds and marks, then goes away
    {
        let mut session = Session::new(&config);
        session.handle("todo buy milk");
        session.handle("deadline submit report /by 2025-10-10 15:00");
        session.handle("event trip /from Mon /to Tue");
        session.handle("mark 1");
        session.handle("bye");
    }

    // Assert - second session sees the same list
    let mut session = Session::new(&config);
    assert_eq!(
        session.handle("list"),
        "Here are the tasks in your list:\n\
         1.[T][X] buy milk\n\
         2.[D][ ] submit report (by: Oct 10 2025 3PM)\n\
         3.[E][ ] trip (from: Mon to: Tue)"
    );
}

#[test]
fn every_mutation_is_written_through() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let mut session = Session::new(&config);

    // Act & Assert - the file tracks each mutation, no bye needed
    session.handle("todo buy milk");
    let content = fs::read_to_string(&config.data_path).unwrap();
    assert_eq!(content, "T | 0 | buy milk\n");

    session.handle("mark 1");
    let content = fs::read_to_string(&config.data_path).unwrap();
    assert_eq!(content, "T | 1 | buy milk\n");

    session.handle("delete 1");
    let content = fs::read_to_string(&config.data_path).unwrap();
    assert_eq!(content, "");
}

#[test]
fn corrupt_file_downgrades_to_empty_session() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::write(&config.data_path, "D | 0 | broken | not-a-date\n").unwrap();

    // Act
    let mut session = Session::new(&config);

    // Assert - warned in the greeting, then usable from scratch
    assert!(session.greet().contains("Starting with an empty task list."));
    assert_eq!(session.handle("list"), "Your task list is empty!");

    // The first mutation replaces the corrupt file
    session.handle("todo start over");
    let content = fs::read_to_string(&config.data_path).unwrap();
    assert_eq!(content, "T | 0 | start over\n");
}

#[test]
fn storage_tolerates_foreign_lines() {
    // Arrange - a file with hand-edited noise between records
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.txt");
    fs::write(
        &path,
        "T | 1 | buy milk\n\nsome note to self\nZ | 0 | future record | x\nE | 0 | trip | Mon | Tue\n",
    )
    .unwrap();

    // Act
    let tasks = Storage::new(&path).load().unwrap();

    // Assert - unknown material is skipped, valid records load
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].description(), "buy milk");
    assert_eq!(tasks[1].description(), "trip");
}

#[test]
fn saved_records_match_the_documented_format() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.txt");
    let storage = Storage::new(&path);

    let mut tasks = TaskList::new();
    tasks.add(Task::todo("buy milk"));
    tasks.add(Task::deadline("submit report", "2025-10-10 15:00").unwrap());
    tasks.add(Task::event("trip", "Mon", "Tue"));
    tasks.mark(0).unwrap();

    // Act
    storage.save(&tasks).unwrap();

    // Assert
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "T | 1 | buy milk\n\
         D | 0 | submit report | 2025-10-10 15:00\n\
         E | 0 | trip | Mon | Tue\n"
    );
}
