//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// Input closed while a hand was waiting on the player.
pub const INTERRUPTED: i32 = 130;
