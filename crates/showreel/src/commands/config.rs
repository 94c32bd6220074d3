use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let config = Config::load_or_default();
    let intro = config.intro_config();

    println!("{}", "Showreel configuration".bold());
    if let Ok(path) = Config::path() {
        println!("  {} {}", "file:".dimmed(), path.display());
    }
    println!();
    println!(
        "  {:<20} {}",
        "defaults.theme".cyan(),
        config
            .defaults
            .as_ref()
            .and_then(|d| d.theme.as_deref())
            .unwrap_or("dark (default)")
    );
    println!("  {:<20} {}", "intro.loops".cyan(), intro.loops);
    println!("  {:<20} {}", "intro.duration".cyan(), intro.duration);
    println!("  {:<20} {}", "intro.media_wait".cyan(), intro.media_wait);
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value} ({})",
        "Saved".green().bold(),
        path.display()
    );
    Ok(())
}
