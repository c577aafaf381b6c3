use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

use crate::cli::parser::Commands;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg).unwrap());
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                messages::warning(format!(
                    "No config file at {} — defaults are in use (run `praxishours init`)",
                    path.display()
                ));
                return Ok(());
            }

            match cfg.time_format.as_str() {
                "12h" | "24h" => {}
                other => {
                    messages::warning(format!(
                        "Unknown time_format '{}' (expected 12h or 24h), falling back to 12h",
                        other
                    ));
                }
            }

            messages::success(format!("Configuration OK: {}", path.display()));
        }
    }

    Ok(())
}
