//! Init Command
//!
//! Create `.nightshift/` with a project config in the target directory.

use std::path::PathBuf;

use crate::cli::ui::Output;
use crate::cli::util::{project_name, resolve_root};
use crate::config::{ConfigLoader, PROJECT_DIR};
use crate::types::{NightshiftError, Result};

pub fn run(path: Option<PathBuf>, force: bool) -> Result<()> {
    let root = resolve_root(path)?;

    if ConfigLoader::is_project_initialized(&root) && !force {
        return Err(NightshiftError::Config(
            "Already initialized. Use --force to overwrite.".to_string(),
        ));
    }

    let name = project_name(&root);
    let config_path = ConfigLoader::init_project(&root, Some(&name))?;

    if let Err(e) = ConfigLoader::init_global(false) {
        tracing::debug!("Global config init skipped: {}", e);
    }

    let out = Output::new();
    out.success(&format!("Initialized nightshift in {}/", PROJECT_DIR));
    out.field("Project", &name);
    out.field("Config", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Run 'nightshift recommend' to pick a theme for this project");
    println!("  2. Run 'nightshift apply --dry-run' to preview the dark variants");

    Ok(())
}
