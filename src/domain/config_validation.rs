//! Game configuration validation.
//!
//! Validates every `[game]` field before a simulation runs.

use crate::domain::error::TycoonError;
use crate::ports::config_port::ConfigPort;

pub fn validate_game_config(config: &dyn ConfigPort) -> Result<(), TycoonError> {
    validate_players(config)?;
    validate_turns(config)?;
    validate_starting_funds(config)?;
    validate_pass_start_bonus(config)?;
    Ok(())
}

fn validate_players(config: &dyn ConfigPort) -> Result<(), TycoonError> {
    let value = config.get_int("game", "players", 2);
    if !(2..=8).contains(&value) {
        return Err(TycoonError::ConfigInvalid {
            section: "game".to_string(),
            key: "players".to_string(),
            reason: "players must be between 2 and 8".to_string(),
        });
    }
    Ok(())
}

fn validate_turns(config: &dyn ConfigPort) -> Result<(), TycoonError> {
    let value = config.get_int("game", "turns", 50);
    if value <= 0 {
        return Err(TycoonError::ConfigInvalid {
            section: "game".to_string(),
            key: "turns".to_string(),
            reason: "turns must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_starting_funds(config: &dyn ConfigPort) -> Result<(), TycoonError> {
    let value = config.get_int("game", "starting_funds", 2000);
    if value <= 0 {
        return Err(TycoonError::ConfigInvalid {
            section: "game".to_string(),
            key: "starting_funds".to_string(),
            reason: "starting_funds must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_pass_start_bonus(config: &dyn ConfigPort) -> Result<(), TycoonError> {
    let value = config.get_int("game", "pass_start_bonus", 2000);
    if value < 0 {
        return Err(TycoonError::ConfigInvalid {
            section: "game".to_string(),
            key: "pass_start_bonus".to_string(),
            reason: "pass_start_bonus must be non-negative".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn adapter(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn empty_config_is_valid_via_defaults() {
        let config = adapter("[game]\n");
        assert!(validate_game_config(&config).is_ok());
    }

    #[test]
    fn full_config_is_valid() {
        let config = adapter(
            "[game]\nplayers = 4\nturns = 100\nstarting_funds = 1500\npass_start_bonus = 200\nfast_mode = true\n",
        );
        assert!(validate_game_config(&config).is_ok());
    }

    #[test]
    fn too_few_players_rejected() {
        let config = adapter("[game]\nplayers = 1\n");
        let err = validate_game_config(&config).unwrap_err();
        assert!(matches!(
            err,
            TycoonError::ConfigInvalid { ref key, .. } if key == "players"
        ));
    }

    #[test]
    fn too_many_players_rejected() {
        let config = adapter("[game]\nplayers = 9\n");
        assert!(validate_game_config(&config).is_err());
    }

    #[test]
    fn zero_turns_rejected() {
        let config = adapter("[game]\nturns = 0\n");
        let err = validate_game_config(&config).unwrap_err();
        assert!(matches!(
            err,
            TycoonError::ConfigInvalid { ref key, .. } if key == "turns"
        ));
    }

    #[test]
    fn negative_starting_funds_rejected() {
        let config = adapter("[game]\nstarting_funds = -100\n");
        let err = validate_game_config(&config).unwrap_err();
        assert!(matches!(
            err,
            TycoonError::ConfigInvalid { ref key, .. } if key == "starting_funds"
        ));
    }

    #[test]
    fn negative_bonus_rejected() {
        let config = adapter("[game]\npass_start_bonus = -1\n");
        assert!(validate_game_config(&config).is_err());
    }

    #[test]
    fn zero_bonus_allowed() {
        let config = adapter("[game]\npass_start_bonus = 0\n");
        assert!(validate_game_config(&config).is_ok());
    }
}
