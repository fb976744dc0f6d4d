// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end session workflow tests.
//!
//! These tests drive full command sequences through a session, checking the
//! responses a user would see rather than internal state.

use tempfile::TempDir;

use taskpal_core::{Config, Session};

fn session_in(dir: &TempDir) -> Session {
    let config = Config {
        data_path: dir.path().join("tasks.txt"),
    };
    Session::new(&config)
}

#[test]
fn add_mark_delete_flow() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);

    // Act
    session.handle("todo buy milk");
    session.handle("deadline submit report /by 2025-10-10 15:00");
    session.handle("event team lunch /from noon /to 1pm");
    session.handle("mark 2");

    // Assert
    assert_eq!(
        session.handle("list"),
        "Here are the tasks in your list:\n\
         1.[T][ ] buy milk\n\
         2.[D][X] submit report (by: Oct 10 2025 3PM)\n\
         3.[E][ ] team lunch (from: noon to: 1pm)"
    );

    // Act - remove the middle task, later tasks shift down
    session.handle("delete 2");

    // Assert
    assert_eq!(
        session.handle("list"),
        "Here are the tasks in your list:\n\
         1.[T][ ] buy milk\n\
         2.[E][ ] team lunch (from: noon to: 1pm)"
    );
}

#[test]
fn find_then_edit_flow() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    session.handle("todo buy milk");
    session.handle("deadline pay rent /by 2025-11-01");

    // Act & Assert - find is a read-only view with its own numbering
    assert_eq!(
        session.handle("find rent"),
        "Here are the matching tasks in your list:\n1.[D][ ] pay rent (by: Nov 1 2025)"
    );

    // Act & Assert - edit addresses the full list, not the find view
    assert_eq!(
        session.handle("edit 2 /by 2025-12-01 09:00"),
        "Task updated successfully!\n    [D][ ] pay rent (by: Dec 1 2025 9AM)"
    );
}

#[test]
fn rejected_commands_do_not_change_the_list() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    session.handle("todo buy milk");

    // Act - a batch of malformed commands
    session.handle("todo");
    session.handle("deadline report");
    session.handle("deadline report /by soon");
    session.handle("event lunch /from noon");
    session.handle("mark 99");
    session.handle("edit 1");
    session.handle("frobnicate");

    // Assert
    assert_eq!(
        session.handle("list"),
        "Here are the tasks in your list:\n1.[T][ ] buy milk"
    );
}

#[test]
fn edit_resets_completion() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    session.handle("todo buy milk");
    session.handle("mark 1");

    // Act
    session.handle("edit 1 /desc buy oat milk");

    // Assert - the rebuilt task starts over as not done
    assert_eq!(
        session.handle("list"),
        "Here are the tasks in your list:\n1.[T][ ] buy oat milk"
    );
}
