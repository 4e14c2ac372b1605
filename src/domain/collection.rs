use log::warn;
use std::collections::HashMap;

use super::models::Battle;

/// Battles in source order, indexed by battle ID
pub struct BattleCatalog {
    battles: Vec<Battle>,
    index: HashMap<String, usize>,
}

impl BattleCatalog {
    pub fn new() -> Self {
        Self {
            battles: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// First record wins when an ID repeats.
    pub fn add(&mut self, battle: Battle) {
        if self.index.contains_key(&battle.battle_id) {
            warn!("Duplicate battle id {}, keeping the first record", battle.battle_id);
        } else {
            self.index.insert(battle.battle_id.clone(), self.battles.len());
        }
        self.battles.push(battle);
    }

    pub fn len(&self) -> usize {
        self.battles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.battles.is_empty()
    }

    pub fn find_battle(&self, id: &str) -> Option<&Battle> {
        self.index.get(id).map(|&idx| &self.battles[idx])
    }

    pub fn battles(&self) -> &[Battle] {
        &self.battles
    }

    /// Latest first
    pub fn timeline(&self) -> Vec<&Battle> {
        sort_for_timeline(&self.battles)
    }
}

impl Default for BattleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Battle> for BattleCatalog {
    fn from_iter<I: IntoIterator<Item = Battle>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for battle in iter {
            catalog.add(battle);
        }
        catalog
    }
}

/// Descending by start time. Equal start times keep their input order.
pub fn sort_for_timeline(battles: &[Battle]) -> Vec<&Battle> {
    let mut ordered: Vec<&Battle> = battles.iter().collect();
    ordered.sort_by(|a, b| b.timestamp_start.cmp(&a.timestamp_start));
    ordered
}
