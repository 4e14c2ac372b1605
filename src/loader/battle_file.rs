use anyhow::{Result, bail};
use log::{info, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Battle;
use crate::errors::{with_parse_context, with_read_context};

/// Battles read from disk, plus a message for the presenter when something went wrong.
#[derive(Debug, Default)]
pub struct LoadedBattles {
    pub battles: Vec<Battle>,
    pub warning: Option<String>,
}

impl LoadedBattles {
    fn empty_with_warning(message: String) -> Self {
        Self {
            battles: Vec::new(),
            warning: Some(message),
        }
    }
}

/// Reader for the recorder's `data.json`
#[derive(Debug, Clone)]
pub struct BattleFile {
    path: PathBuf,
}

impl BattleFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Never fails: a missing or unreadable file yields no battles and a warning.
    pub fn load(&self) -> LoadedBattles {
        if !self.path.exists() {
            let message = format!("No battle data found at {}", self.path.display());
            warn!("{}", message);
            return LoadedBattles::empty_with_warning(message);
        }

        match self.read_records() {
            Ok(loaded) => loaded,
            Err(e) => {
                let message = format!("{:#}", e);
                warn!("{}", message);
                LoadedBattles::empty_with_warning(message)
            }
        }
    }

    fn read_records(&self) -> Result<LoadedBattles> {
        let json = with_read_context(fs::read_to_string(&self.path), &self.path)?;
        let document: Value = with_parse_context(serde_json::from_str(&json), "battle data JSON")?;

        let Value::Array(records) = document else {
            bail!(
                "Battle data in {} must be a JSON array of battles",
                self.path.display()
            );
        };

        let total = records.len();
        let battles: Vec<Battle> = records
            .into_iter()
            .enumerate()
            .filter_map(|(idx, record)| parse_record(idx, record))
            .collect();

        let skipped = total - battles.len();
        info!("Loaded {} battles from {}", battles.len(), self.path.display());

        let warning = (skipped > 0).then(|| format!("Skipped {} malformed battle records", skipped));
        Ok(LoadedBattles { battles, warning })
    }
}

fn parse_record(idx: usize, record: Value) -> Option<Battle> {
    match serde_json::from_value(record) {
        Ok(battle) => Some(battle),
        Err(e) => {
            warn!("Skipping battle record #{}: {}", idx, e);
            None
        }
    }
}
