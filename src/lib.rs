//! Rigel: an interactive command console.
//!
//! Callers register [`command::Command`]s and hand them to [`shell::run`],
//! which prompts, reads, tokenizes and dispatches until the input ends or a
//! handler asks to exit. The leading token of each line is matched against
//! the registered names with exact-or-unambiguous-prefix resolution; the
//! remaining tokens are passed to the handler as borrowed arguments.

pub mod analysis;
pub mod command;
pub mod output;
pub mod shell;

pub use command::{Action, Command, Flow};
