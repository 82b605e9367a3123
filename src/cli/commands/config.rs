//! Config Command
//!
//! Usage:
//!   nightshift config show [-g] [-f json]
//!   nightshift config path
//!   nightshift config init [-g] [--force]

use crate::cli::ui::Output;
use crate::cli::util::{OutputFormat, project_name, resolve_root};
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show configuration
pub fn show(global: bool, format: OutputFormat) -> Result<()> {
    if !global {
        // Merged effective config
        let root = resolve_root(None)?;
        return ConfigLoader::show_config(&root, format.is_json());
    }

    match ConfigLoader::global_config_path() {
        Some(path) if path.exists() => {
            let content = std::fs::read_to_string(&path)?;
            println!("# Global Config: {}\n", path.display());
            println!("{}", content);
        }
        Some(_) => {
            println!("No global config found.");
            println!("Run 'nightshift config init --global' to create one.");
        }
        None => println!("Cannot determine global config directory."),
    }
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    let root = resolve_root(None)?;
    ConfigLoader::show_path(&root);
    Ok(())
}

pub fn init_global(force: bool) -> Result<()> {
    let path = ConfigLoader::init_global(force)?;
    let out = Output::new();
    out.success("Initialized global configuration");
    out.field("Config", path.display());
    Ok(())
}

pub fn init_project() -> Result<()> {
    let root = resolve_root(None)?;
    let name = project_name(&root);
    let path = ConfigLoader::init_project(&root, Some(&name))?;
    let out = Output::new();
    out.success("Initialized project configuration");
    out.field("Config", path.display());
    Ok(())
}
