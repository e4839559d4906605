use crate::commands::{CmdMessage, CmdResult, HmsPaths};
use crate::config::HmsConfig;
use crate::error::{HmsError, Result};
use crate::model::TableKind;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Config keys are `<table>-file`, e.g. `drugs-file`.
pub fn key_table(key: &str) -> Result<TableKind> {
    key.strip_suffix("-file")
        .ok_or_else(|| HmsError::Api(format!("Unknown config key: {}", key)))?
        .parse()
        .map_err(|_| HmsError::Api(format!("Unknown config key: {}", key)))
}

pub fn run(paths: &HmsPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = HmsConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let kind = key_table(&key)?;
            result.add_message(CmdMessage::info(format!(
                "{} = {}",
                key,
                config.file_name(kind)
            )));
        }
        ConfigAction::Set(key, value) => {
            let kind = key_table(&key)?;
            config.set_file_name(kind, &value)?;
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}
