// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod config;
mod error;
mod parser;
mod session;
mod storage;
mod task;
mod task_list;

pub use crate::{
    config::{APP_NAME, Config},
    error::{Error, Result},
    parser::{EditArgs, parse_deadline_args, parse_edit_args, parse_event_args, parse_index},
    session::Session,
    storage::Storage,
    task::{Task, TaskKind},
    task_list::TaskList,
};
