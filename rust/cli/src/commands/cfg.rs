//! `cfg`: resolved configuration with the source of each value.

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "ai_players": {
            "value": config.ai_players,
            "source": sources.ai_players,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "think_delay_ms": {
            "value": config.think_delay_ms,
            "source": sources.think_delay_ms,
        },
        "ai_strategy": {
            "value": config.ai_strategy,
            "source": sources.ai_strategy,
        },
        "tie_break": {
            "value": config.tie_break,
            "source": sources.tie_break,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
