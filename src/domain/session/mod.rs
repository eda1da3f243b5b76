//! Interactive session domain module

mod command;
mod state;

pub use command::{CommandParseError, SessionCommand, COMMAND_HELP, COMMAND_PREFIX};
pub use state::InteractionState;
