use crate::commands::{CmdMessage, CmdResult, HmsPaths};
use crate::config::HmsConfig;
use crate::error::Result;
use crate::store::Store;

pub fn run(store: &Store, paths: &HmsPaths) -> Result<CmdResult> {
    let mut created = store.init()?;

    let config_path = paths.data_dir.join("config.json");
    if !config_path.exists() {
        HmsConfig::load(&paths.data_dir)?.save(&paths.data_dir)?;
        created.push(config_path);
    }

    let mut result = CmdResult::default();
    if created.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Already initialized at {}",
            paths.data_dir.display()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Initialized data directory at {}",
            paths.data_dir.display()
        )));
    }
    Ok(result.with_created_paths(created))
}
