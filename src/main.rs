mod app;
mod config;
mod error;
mod events;
mod logger;
mod registry;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::{crate_version, Arg};
use config::Config;

fn main() -> Result<()> {
    let matches = clap::App::new("storefront-tui")
        .version(crate_version!())
        .about("A terminal storefront for searching and launching installed applications")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use the given directory for configuration")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    App::start(config)
}
