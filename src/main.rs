mod adapter;
mod config;
mod fixture;
mod layout;
mod list_view;
mod logging;
mod models;
mod row;
mod screen;

use clap::Parser;
use log::info;

use crate::{config::Cli, screen::MainScreen};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _logger = logging::init(cli.log_level, &cli.log_dir())?;
    info!(
        "event=app_start version={} fixture={:?}",
        env!("CARGO_PKG_VERSION"),
        cli.fixture
    );

    let mut screen = MainScreen::on_create(&cli.fixture);
    ratatui::run(|t| screen.run(t))?;

    Ok(())
}
