//! Command handler modules.
//!
//! Each subcommand lives in its own file and exposes one
//! `handle_COMMAND_command` function. Output streams are passed in so the
//! handlers run the same against a terminal or an in-memory buffer.

mod cfg;
mod play;

pub use cfg::handle_cfg_command;
pub use play::{PlayOptions, handle_play_command};
