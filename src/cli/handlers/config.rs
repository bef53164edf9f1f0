//! Handler for the `config` command

use crate::cli::ConfigCommands;
use crate::cli::output::OutputFormatter;
use crate::config::Config;
use crate::error::Result;

/// Handle config subcommands
pub fn handle_config_command(
    command: ConfigCommands,
    config: &Config,
    output: &OutputFormatter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => show(config, output),
        ConfigCommands::Path => {
            let path = Config::default_path();
            if output.is_json() {
                return output.print_json(&serde_json::json!({ "path": path }));
            }
            match path {
                Some(path) => output.info(&path.display().to_string()),
                None => output.warning("No configuration directory available on this platform"),
            }
            Ok(())
        },
    }
}

fn show(config: &Config, output: &OutputFormatter) -> Result<()> {
    if output.is_json() {
        return output.print_json(config);
    }
    output.heading("Configuration");
    output.info(&format!("api.base_url     = {}", config.api.base_url));
    output.info(&format!("api.timeout_secs = {}", config.api.timeout_secs));
    output.info(&format!("ui.page_size     = {}", config.ui.page_size));
    Ok(())
}
