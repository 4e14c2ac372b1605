use super::models::{Battle, ModelInfo};

pub fn battle(id: &str, model_a: &str, model_b: &str, outcome: &str, started_at: &str) -> Battle {
    Battle {
        battle_id: id.to_string(),
        timestamp_start: started_at.parse().unwrap(),
        timestamp_end: None,
        model_a: model(model_a),
        model_b: model(model_b),
        plaintext_color: Some("FF00AA".to_string()),
        rounds: Vec::new(),
        battle_outcome: Some(outcome.to_string()),
    }
}

fn model(name: &str) -> ModelInfo {
    ModelInfo {
        name: name.to_string(),
        role_in_round1: None,
        role_in_round2: None,
    }
}
