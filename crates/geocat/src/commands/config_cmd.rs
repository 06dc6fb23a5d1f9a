//! Configuration command handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let config = geocat_config::load_config()?;
            let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::Validation {
                message: format!("could not render configuration: {e}"),
            })?;
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(
                &geocat_config::config_path().display().to_string(),
                global.quiet,
            );
            Ok(())
        }

        ConfigCommand::Init { backend, email } => {
            let mut config = geocat_config::load_config_or_default();
            if let Some(backend) = backend {
                config.backend = backend;
            }
            if let Some(email) = email {
                config.email = Some(email);
            }
            geocat_config::save_config(&config)?;
            if !global.quiet {
                eprintln!("Wrote {}", geocat_config::config_path().display());
            }
            Ok(())
        }
    }
}
