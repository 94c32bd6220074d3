mod anim;
mod app;
mod cli;
mod commands;
mod config;
mod controller;
mod deck;
mod gesture;
mod media;
mod render;
mod theme;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    cli.run()
}
