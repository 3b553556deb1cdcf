use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::config::{Config, ConfigManager};
use crate::core::InventoryManager;
use crate::errors::{CliError, InventoryError};
use crate::storage::JsonStorage;

/// How the shell was invoked. Script mode never prompts; destructive
/// commands proceed without confirmation there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler needs: the loaded inventory, configuration,
/// and prompt settings.
pub struct CliContext {
    pub mode: CliMode,
    pub manager: InventoryManager,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl CliContext {
    pub fn new(mode: CliMode) -> Result<Self, InventoryError> {
        let storage = JsonStorage::new_default()?;
        let manager = InventoryManager::new(Box::new(storage));
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        Ok(Self {
            mode,
            manager,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub fn confirm(&self, prompt: &str) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|err| CliError::Command(err.to_string()))
    }

    pub fn remember_inventory(&mut self, name: &str) -> Result<(), CliError> {
        self.config.last_opened_inventory = Some(name.to_string());
        self.config_manager.save(&self.config)?;
        Ok(())
    }
}
