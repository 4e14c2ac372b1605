use anyhow::Result;

use obfuscation_arena::cli::{Cli, Command};
use obfuscation_arena::{
    build_config, handle_battles, handle_completions, handle_leaderboard, handle_serve,
    handle_show, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = build_config(cli);

    match &cli.command {
        Command::Serve { port } => handle_serve(*port, config),
        Command::Leaderboard => handle_leaderboard(&config),
        Command::Battles { limit } => handle_battles(&config, *limit),
        Command::Show { battle_id } => handle_show(&config, battle_id),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
