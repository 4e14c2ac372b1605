use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "LLM obfuscation arena leaderboard")]
pub struct Cli {
    /// Path to the recorded battles (defaults to $DATA_FILE_PATH or data.json)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Elo K-factor (defaults to $ELO_K_FACTOR or 32)
    #[arg(long, global = true)]
    pub k_factor: Option<f64>,

    /// Starting Elo for new models (defaults to $ELO_DEFAULT_RATING or 1500)
    #[arg(long, global = true)]
    pub default_rating: Option<f64>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the JSON API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print the ranked model table
    Leaderboard,
    /// Print the most recent battles, latest first
    Battles {
        /// Number of battles to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
    /// Print every round of one battle
    Show {
        /// Battle identifier
        battle_id: String,
    },
    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}
