//! The interactive read-resolve-dispatch loop.

use std::io::{self, BufRead, Write};

use crate::command::{Command, Flow, Resolution, resolve};
use crate::output::{print_error, print_help};

/// Prompt written before each read.
pub const PROMPT: &str = "> ";

/// Capacity of the input line buffer, in bytes. One byte is held back so a
/// full read carries at most `LINE_CAP - 1` content bytes; anything beyond
/// that stays in the stream and becomes the next line.
pub const LINE_CAP: usize = 100;

/// Runs the console over locked stdin/stdout with the default prompt.
/// Returns the exit code: the one a handler asked for, or 0 at end of input.
pub fn run(commands: Vec<Command>) -> io::Result<i32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(commands, PROMPT, stdin.lock(), stdout.lock())
}

/// Runs the console over arbitrary streams.
///
/// The `help`, `quit` and `exit` built-ins are appended to `commands` before
/// the first prompt. Each iteration prompts, reads one line (capped at
/// [`LINE_CAP`]), tokenizes it on whitespace and dispatches the leading token.
/// Blank lines re-prompt silently. Unresolved tokens and handler faults are
/// reported in red and the loop keeps going; only a [`Flow::Exit`] from a
/// handler or end of input ends it.
pub fn run_with<R: BufRead, W: Write>(
    mut commands: Vec<Command>,
    prompt: &str,
    mut input: R,
    mut output: W,
) -> io::Result<i32> {
    install_builtins(&mut commands);

    let mut line = String::new();
    loop {
        output.write_all(prompt.as_bytes())?;
        output.flush()?;
        if read_line_capped(&mut input, &mut line)? == 0 {
            return Ok(0);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = tokens.split_first() else {
            continue;
        };

        match resolve(&commands, head) {
            Resolution::Found(idx) => {
                tracing::debug!("'{}' resolved to '{}'", head, commands[idx].name);
                match (commands[idx].action)(args, &mut output) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit(code)) => return Ok(code),
                    Err(e) => {
                        let msg = format!("command '{}' failed: {:#}", commands[idx].name, e);
                        print_error(&mut output, &msg)?;
                    }
                }
            }
            res @ (Resolution::Ambiguous | Resolution::NotFound) => {
                tracing::debug!("'{}' did not resolve: {:?}", head, res);
                print_error(&mut output, &format!("Invalid command: {}", head))?;
            }
        }
    }
}

/// Appends `help`, `quit` and `exit`. The help listing is captured here, so
/// it covers every command registered before the loop plus the built-ins
/// themselves, in registration order.
fn install_builtins(commands: &mut Vec<Command>) {
    let mut listing: Vec<(String, String)> = commands
        .iter()
        .map(|c| (c.name.clone(), c.description.clone()))
        .collect();
    for (name, description) in BUILTINS {
        listing.push((name.to_string(), description.to_string()));
    }

    let (help_name, help_desc) = BUILTINS[0];
    commands.push(Command::new(help_name, help_desc, move |_args, out| {
        print_help(out, &listing)?;
        Ok(Flow::Continue)
    }));
    for (name, description) in &BUILTINS[1..] {
        commands.push(Command::new(*name, *description, |_args, _out| {
            Ok(Flow::Exit(0))
        }));
    }
}

const BUILTINS: [(&str, &str); 3] = [
    ("help", "list the supported commands"),
    ("quit", "leave the console"),
    ("exit", "leave the console"),
];

/// Reads one line into `line`, fgets-style: stop after a newline or once
/// `LINE_CAP - 1` bytes are taken, whichever comes first. Bytes past the cap
/// are left in the stream. Returns the number of bytes consumed; 0 means end
/// of input.
fn read_line_capped<R: BufRead>(input: &mut R, line: &mut String) -> io::Result<usize> {
    line.clear();
    let mut total = 0usize;
    while total < LINE_CAP - 1 {
        let available = input.fill_buf()?;
        if available.is_empty() {
            break;
        }
        let room = LINE_CAP - 1 - total;
        let (take, hit_newline) = match available.iter().position(|&b| b == b'\n') {
            Some(pos) if pos < room => (pos + 1, true),
            _ => (available.len().min(room), false),
        };
        line.push_str(&String::from_utf8_lossy(&available[..take]));
        input.consume(take);
        total += take;
        if hit_newline {
            break;
        }
    }
    Ok(total)
}
