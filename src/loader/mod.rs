mod battle_file;

pub use battle_file::{BattleFile, LoadedBattles};
