pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod loader;
pub mod rating;
pub mod services;

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::domain::project_for_display;
use crate::services::report;
use crate::services::server::ServerService;
use crate::services::snapshot::ArenaSnapshot;

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Environment first, then command-line flags on top
pub fn build_config(cli: &Cli) -> AppConfig {
    AppConfig::from_env()
        .with_data_path(cli.data.clone())
        .with_k_factor(cli.k_factor)
        .with_default_rating(cli.default_rating)
}

pub fn handle_serve(port: u16, config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_leaderboard(config: &AppConfig) -> Result<()> {
    let snapshot = ArenaSnapshot::load(config);
    print_warning(&snapshot);
    print!("{}", report::render_leaderboard(&snapshot.leaderboard()));
    Ok(())
}

pub fn handle_battles(config: &AppConfig, limit: usize) -> Result<()> {
    let snapshot = ArenaSnapshot::load(config);
    print_warning(&snapshot);

    let mut timeline = snapshot.timeline();
    timeline.truncate(limit);
    print!("{}", report::render_timeline(&timeline));
    Ok(())
}

pub fn handle_show(config: &AppConfig, battle_id: &str) -> Result<()> {
    let snapshot = ArenaSnapshot::load(config);
    print_warning(&snapshot);

    let Some(battle) = snapshot.catalog.find_battle(battle_id) else {
        bail!("Battle {} not found", battle_id);
    };
    print!("{}", report::render_detail(&project_for_display(battle)));
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn print_warning(snapshot: &ArenaSnapshot) {
    if let Some(warning) = &snapshot.warning {
        eprintln!("{}", warning.yellow());
    }
}
