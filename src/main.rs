use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use teller_cli::config::paths::TellerPaths;
use teller_cli::menu;
use teller_cli::storage::{ClientStore, CorruptLinePolicy};

#[derive(Parser)]
#[command(
    name = "teller",
    version,
    about = "Terminal-based client record and balance ledger manager",
    long_about = "teller is a menu-driven console manager for bank client \
                  records: list, add, delete, update and find clients, and \
                  perform deposit/withdraw transactions against a client's \
                  balance. All data is persisted to a flat text file."
)]
struct Cli {
    /// Path to the clients storage file (defaults to the data directory)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// What to do with storage lines that fail to decode: warn or skip
    #[arg(long, value_name = "POLICY", default_value = "warn")]
    on_corrupt: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let policy = CorruptLinePolicy::parse(&cli.on_corrupt)
        .ok_or_else(|| anyhow!("Invalid corrupt-line policy: '{}'. Valid policies: warn, skip", cli.on_corrupt))?;

    let path = match cli.file {
        Some(path) => path,
        None => {
            let paths = TellerPaths::new()?;
            paths.ensure_directories()?;
            paths.clients_file()
        }
    };

    let store = ClientStore::new(path, policy);
    menu::run(&store)?;

    Ok(())
}
