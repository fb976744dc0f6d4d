// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};

use taskpal_core::Session;

/// Drive a session over a line-oriented transcript: print the greeting, then
/// answer one response per input line until `bye` or end of input.
pub fn run<R, W>(session: &mut Session, input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", session.greet())?;

    for line in input.lines() {
        let line = line?;
        let done = is_bye(&line);
        writeln!(output, "{}", session.handle(&line))?;
        if done {
            break;
        }
    }

    Ok(())
}

fn is_bye(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|word| word.eq_ignore_ascii_case("bye"))
}
