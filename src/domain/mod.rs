mod collection;
pub mod models;
pub mod projection;
#[cfg(test)]
pub(crate) mod test_support;

pub use collection::{BattleCatalog, sort_for_timeline};
pub use models::*;
pub use projection::{BattleDetailView, BattleSummary, project_for_display, summarize};
