//! Interactive prompts for missing arguments

use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io::IsTerminal;

use crate::config::defaults;
use crate::error::{Result, VtmError};
use crate::vtm::ResourceType;

/// Whether prompting is possible: interactive terminal and not batch mode
pub fn can_prompt(batch: bool) -> bool {
    !batch && std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Ask the user to pick a resource type
pub fn prompt_resource() -> Result<String> {
    let keys = ResourceType::keys();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Resource type")
        .items(&keys)
        .default(0)
        .interact()?;

    keys.get(selection)
        .map(|k| k.to_string())
        .ok_or_else(|| VtmError::Config("no resource type selected".to_string()))
}

/// Ask the user for an instance name, `all` by default
pub fn prompt_name() -> Result<String> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("all or resource name")
        .default(defaults::ALL.to_string())
        .interact_text()?;
    Ok(name)
}
