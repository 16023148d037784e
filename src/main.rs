use anyhow::Result;
use clap::Parser;
use log::warn;

use ball_counter::{run_driver, DemoConfig};

#[derive(Parser, Debug)]
#[command(name = "ball_counter", about = "Ball construction counter demo")]
struct Cli {
    /// Path to the RON config file.
    #[arg(long, default_value = "assets/config/demo.ron")]
    config: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Fall back to defaults if the config is missing or malformed.
    let (cfg, err) = DemoConfig::load_or_default(&cli.config);
    if let Some(e) = err {
        warn!("{}: {e}; using defaults", cli.config);
    }
    for w in cfg.validate() {
        warn!("config: {w}");
    }

    run_driver(&cfg);
    Ok(())
}
