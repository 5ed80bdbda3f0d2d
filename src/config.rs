// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::storage::AgendaStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct Config {
    /// Agenda file to use instead of `<data_dir>/agenda.txt`. The `--file`
    /// CLI flag overrides both.
    #[serde(default)]
    pub agenda_file: Option<String>,

    /// When true, `list` prints the aligned long form (date, weekday, time,
    /// duration, title) instead of raw serialized lines.
    #[serde(default)]
    pub long_listing: bool,
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Load the configuration, falling back to defaults when no config file
    /// exists yet. A present-but-unreadable file is still an error.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(ctx)
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        AgendaStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            AgendaStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }

    /// Resolves the agenda file path: CLI override, then config override,
    /// then the context default.
    pub fn resolve_agenda_path(
        &self,
        ctx: &dyn AppContext,
        cli_override: Option<&PathBuf>,
    ) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.clone());
        }
        if let Some(path) = &self.agenda_file {
            return Ok(PathBuf::from(path));
        }
        ctx.get_agenda_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;
    use serial_test::serial;

    #[test]
    #[serial]
    fn load_or_default_when_missing() {
        let ctx = TestContext::new("config_missing");
        let config = Config::load_or_default(&ctx).unwrap();
        assert!(config.agenda_file.is_none());
        assert!(!config.long_listing);
        // A plain load must still surface the missing file.
        assert!(Config::load(&ctx).is_err());
    }

    #[test]
    #[serial]
    fn save_then_load_round_trip() {
        let ctx = TestContext::new("config_round_trip");
        let config = Config {
            agenda_file: Some("/tmp/other_agenda.txt".to_string()),
            long_listing: true,
        };
        config.save(&ctx).unwrap();

        let loaded = Config::load(&ctx).unwrap();
        assert_eq!(loaded.agenda_file.as_deref(), Some("/tmp/other_agenda.txt"));
        assert!(loaded.long_listing);
    }

    #[test]
    #[serial]
    fn agenda_path_resolution_precedence() {
        let ctx = TestContext::new("config_resolution");
        let mut config = Config::default();

        let default_path = config.resolve_agenda_path(&ctx, None).unwrap();
        assert!(default_path.ends_with("agenda.txt"));

        config.agenda_file = Some("/tmp/from_config.txt".to_string());
        let from_config = config.resolve_agenda_path(&ctx, None).unwrap();
        assert_eq!(from_config, PathBuf::from("/tmp/from_config.txt"));

        let cli = PathBuf::from("/tmp/from_cli.txt");
        let from_cli = config.resolve_agenda_path(&ctx, Some(&cli)).unwrap();
        assert_eq!(from_cli, cli);
    }
}
