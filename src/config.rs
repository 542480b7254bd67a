use crate::error::{EbcError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_REFERENCE_FILE: &str = "good.xlsx";
pub const DEFAULT_OUTPUT_FILE: &str = "doporučení_aktivace_EBC.xlsx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Název referenčního souboru ve zpracovávané složce
    pub reference_file: String,
    /// Název výstupního souboru ve zpracovávané složce
    pub output_file: String,
    /// Počet pracovních vláken (None = počet jader)
    pub workers: Option<usize>,
    /// Čekat na Enter před ukončením
    pub pause_on_exit: bool,
    /// Vypsat souhrn stavů dat
    pub show_summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_file: DEFAULT_REFERENCE_FILE.into(),
            output_file: DEFAULT_OUTPUT_FILE.into(),
            workers: None,
            pause_on_exit: true,
            show_summary: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.validate()?;
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| EbcError::Config("domovská složka nenalezena".into()))?;
        Ok(home.join(".config").join("ebc-aktivace").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.reference_file.trim().is_empty() {
            return Err(EbcError::Config("název referenčního souboru je prázdný".into()));
        }
        if self.output_file.trim().is_empty() {
            return Err(EbcError::Config("název výstupního souboru je prázdný".into()));
        }
        if self.workers == Some(0) {
            return Err(EbcError::Config("počet vláken musí být alespoň 1".into()));
        }
        Ok(())
    }

    /// Počet vláken: z konfigurace, jinak počet dostupných jader
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(available_workers)
    }
}

pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.reference_file, "good.xlsx");
        assert_eq!(config.output_file, "doporučení_aktivace_EBC.xlsx");
        assert!(config.pause_on_exit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"workers": 3}"#).unwrap();
        assert_eq!(config.workers, Some(3));
        assert_eq!(config.worker_count(), 3);
        assert_eq!(config.reference_file, DEFAULT_REFERENCE_FILE);
        assert!(config.show_summary);
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let config = Config {
            workers: Some(0),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(EbcError::Config(_))));
    }

    #[test]
    fn test_worker_count_defaults_to_cores() {
        let config = Config::default();
        assert!(config.worker_count() >= 1);
    }
}
