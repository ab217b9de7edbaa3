//! Command registry types and the name resolver.

use std::io::Write;

/// Control signal a handler returns to the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep prompting.
    Continue,
    /// Stop the loop and hand this exit code back to the caller.
    Exit(i32),
}

/// A command handler. Receives the tokens that followed the command name on
/// the input line, plus the console's output stream. Returning an error never
/// stops the loop; it is reported and the next prompt follows.
pub type Action = Box<dyn FnMut(&[&str], &mut dyn Write) -> anyhow::Result<Flow>>;

/// One registered command. Built once before the loop starts; the loop itself
/// appends the `help`, `quit` and `exit` built-ins.
pub struct Command {
    pub name: String,
    pub description: String,
    pub action: Action,
}

impl Command {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        action: impl FnMut(&[&str], &mut dyn Write) -> anyhow::Result<Flow> + 'static,
    ) -> Self {
        Command {
            name: name.into(),
            description: description.into(),
            action: Box::new(action),
        }
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Outcome of resolving a typed token against the registry. `Ambiguous` and
/// `NotFound` are reported identically to the user; the loop only logs the
/// difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Index of the matched command.
    Found(usize),
    /// The token is a strict prefix of two or more names and equal to none.
    Ambiguous,
    NotFound,
}

/// Resolves `token` to a registered command.
///
/// An exact name match always wins, no matter how many other names the token
/// prefixes. Otherwise a token that is a strict prefix of exactly one name
/// selects that name; a prefix of several names is ambiguous. The empty token
/// is never a match even though it prefixes every name — the loop's tokenizer
/// uses "no token" as its blank-line signal, so an empty token only shows up
/// here when the resolver is called directly.
pub fn resolve(commands: &[Command], token: &str) -> Resolution {
    if token.is_empty() {
        return Resolution::NotFound;
    }
    let mut prefix_match = None;
    for (idx, cmd) in commands.iter().enumerate() {
        if cmd.name == token {
            return Resolution::Found(idx);
        }
        if cmd.name.starts_with(token) {
            if prefix_match.is_some() {
                prefix_match = Some(Resolution::Ambiguous);
            } else {
                prefix_match = Some(Resolution::Found(idx));
            }
        }
    }
    prefix_match.unwrap_or(Resolution::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(names: &[&str]) -> Vec<Command> {
        names
            .iter()
            .map(|n| Command::new(*n, "", |_, _| Ok(Flow::Continue)))
            .collect()
    }

    #[test]
    fn exact_match_wins_over_prefix_candidates() {
        // "stat" prefixes both longer names, but the exact entry still wins
        // even when it comes last in registration order.
        let cmds = registry(&["status", "statistics", "stat"]);
        assert_eq!(resolve(&cmds, "stat"), Resolution::Found(2));
    }

    #[test]
    fn unique_strict_prefix_resolves() {
        let cmds = registry(&["status", "stop"]);
        assert_eq!(resolve(&cmds, "stat"), Resolution::Found(0));
        assert_eq!(resolve(&cmds, "sta"), Resolution::Found(0));
        // "sto" diverges from "status" at the third byte, so it prefixes
        // only "stop" and resolves there.
        assert_eq!(resolve(&cmds, "sto"), Resolution::Found(1));
    }

    #[test]
    fn shared_prefix_is_ambiguous() {
        let cmds = registry(&["status", "stop"]);
        assert_eq!(resolve(&cmds, "st"), Resolution::Ambiguous);
        assert_eq!(resolve(&cmds, "s"), Resolution::Ambiguous);
    }

    #[test]
    fn exact_full_name_beats_shared_prefix() {
        let cmds = registry(&["status", "stop"]);
        assert_eq!(resolve(&cmds, "status"), Resolution::Found(0));
        assert_eq!(resolve(&cmds, "stop"), Resolution::Found(1));
    }

    #[test]
    fn unknown_token_is_not_found() {
        let cmds = registry(&["status", "stop"]);
        assert_eq!(resolve(&cmds, "restart"), Resolution::NotFound);
        assert_eq!(resolve(&cmds, "statuses"), Resolution::NotFound);
    }

    #[test]
    fn empty_token_matches_nothing() {
        let cmds = registry(&["status", "stop"]);
        assert_eq!(resolve(&cmds, ""), Resolution::NotFound);
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        assert_eq!(resolve(&[], "status"), Resolution::NotFound);
    }
}
