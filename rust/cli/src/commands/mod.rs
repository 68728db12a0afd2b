//! Command handler modules for the holdem CLI.
//!
//! Each command lives in its own file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and input readers are passed in, so handlers
//!   run the same against a terminal or in-memory buffers
//! - Errors propagate as [`crate::CliError`]

mod cfg;
mod deal;
mod play;
mod rank;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOptions, handle_play_command};
pub use rank::handle_rank_command;
pub use sim::handle_sim_command;
