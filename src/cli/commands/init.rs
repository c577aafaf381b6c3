use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the schedule JSON file, seeded with the default week
///    (Monday-Friday 09:00-17:00, weekend closed)
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing praxishours…");

    if let Some(custom) = &cli.schedule {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }

    println!("🎉 praxishours initialization completed!");
    Ok(())
}
