use crate::error::{HmsError, Result};
use crate::model::TableKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for hms, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HmsConfig {
    #[serde(default = "default_drugs_file")]
    pub drugs_file: String,

    #[serde(default = "default_requests_file")]
    pub requests_file: String,

    #[serde(default = "default_patients_file")]
    pub patients_file: String,

    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    #[serde(default = "default_staff_file")]
    pub staff_file: String,
}

fn default_drugs_file() -> String {
    TableKind::Drugs.default_file_name().to_string()
}

fn default_requests_file() -> String {
    TableKind::Requests.default_file_name().to_string()
}

fn default_patients_file() -> String {
    TableKind::Patients.default_file_name().to_string()
}

fn default_contacts_file() -> String {
    TableKind::Contacts.default_file_name().to_string()
}

fn default_staff_file() -> String {
    TableKind::Staff.default_file_name().to_string()
}

impl Default for HmsConfig {
    fn default() -> Self {
        Self {
            drugs_file: default_drugs_file(),
            requests_file: default_requests_file(),
            patients_file: default_patients_file(),
            contacts_file: default_contacts_file(),
            staff_file: default_staff_file(),
        }
    }
}

impl HmsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HmsError::Io)?;
        let config: HmsConfig = serde_json::from_str(&content).map_err(HmsError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HmsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HmsError::Serialization)?;
        fs::write(config_path, content).map_err(HmsError::Io)?;
        Ok(())
    }

    pub fn file_name(&self, kind: TableKind) -> &str {
        match kind {
            TableKind::Drugs => &self.drugs_file,
            TableKind::Requests => &self.requests_file,
            TableKind::Patients => &self.patients_file,
            TableKind::Contacts => &self.contacts_file,
            TableKind::Staff => &self.staff_file,
        }
    }

    /// Point `kind` at a different file name inside the data directory.
    pub fn set_file_name(&mut self, kind: TableKind, file_name: &str) -> Result<()> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(HmsError::InvalidArgument(format!(
                "table file must be a plain file name: {:?}",
                file_name
            )));
        }
        let slot = match kind {
            TableKind::Drugs => &mut self.drugs_file,
            TableKind::Requests => &mut self.requests_file,
            TableKind::Patients => &mut self.patients_file,
            TableKind::Contacts => &mut self.contacts_file,
            TableKind::Staff => &mut self.staff_file,
        };
        *slot = file_name.to_string();
        Ok(())
    }

    pub fn table_path(&self, data_dir: &Path, kind: TableKind) -> PathBuf {
        data_dir.join(self.file_name(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = HmsConfig::default();
        assert_eq!(config.drugs_file, "drugs.csv");
        assert_eq!(config.file_name(TableKind::Requests), "replenishment_requests.csv");
    }

    #[test]
    fn test_set_file_name() {
        let mut config = HmsConfig::default();
        config.set_file_name(TableKind::Staff, "team.csv").unwrap();
        assert_eq!(config.file_name(TableKind::Staff), "team.csv");
    }

    #[test]
    fn test_set_file_name_rejects_paths() {
        let mut config = HmsConfig::default();
        assert!(config.set_file_name(TableKind::Staff, "../team.csv").is_err());
        assert!(config.set_file_name(TableKind::Staff, "").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = HmsConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, HmsConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("data");

        let mut config = HmsConfig::default();
        config.set_file_name(TableKind::Drugs, "pharmacy.csv").unwrap();
        config.save(&nested).unwrap();

        let loaded = HmsConfig::load(&nested).unwrap();
        assert_eq!(loaded.drugs_file, "pharmacy.csv");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: HmsConfig = serde_json::from_str(r#"{"staff_file":"team.csv"}"#).unwrap();
        assert_eq!(parsed.staff_file, "team.csv");
        assert_eq!(parsed.patients_file, "patients.csv");
    }
}
