//! Display-oriented reshaping of battle records.
//!
//! Nothing here produces markup. Presenters that emit HTML escape the text fields themselves.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::models::{AllyDecodingExchange, AttackAttempt, Battle, ObfuscationExchange, Round};

/// Placeholder shown in lists for battles without a recorded outcome
pub const MISSING_OUTCOME: &str = "N/A";

/// One row of the "latest first" battle list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleSummary {
    pub battle_id: String,
    pub model_a: String,
    pub model_b: String,
    pub outcome: String,
    pub started_at: DateTime<Utc>,
}

pub fn summarize(battle: &Battle) -> BattleSummary {
    BattleSummary {
        battle_id: battle.battle_id.clone(),
        model_a: battle.model_a.name.clone(),
        model_b: battle.model_b.name.clone(),
        outcome: battle
            .battle_outcome
            .clone()
            .unwrap_or_else(|| MISSING_OUTCOME.to_string()),
        started_at: battle.timestamp_start,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleDetailView {
    pub battle_id: String,
    pub model_a: String,
    pub model_b: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plaintext_color: Option<String>,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    pub rounds: Vec<RoundView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub round_number: u32,
    pub obfuscator: String,
    pub deobfuscator: String,
    pub attacker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscation: Option<ObfuscationView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ally_decoding: Option<AllyDecodingView>,
    pub attempts: Vec<AttemptView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub succeeded_on_attempt: Option<u32>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObfuscationView {
    pub prompt: Option<String>,
    pub response: Option<String>,
    pub parsed_obfuscated_text: Option<String>,
    pub parsed_instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllyDecodingView {
    pub prompt: Option<String>,
    pub response: Option<String>,
    pub guessed_color: Option<String>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptView {
    pub attempt_number: u32,
    /// Share of the instructions revealed, 0.0 to 1.0
    pub instructions_revealed: f64,
    pub prompt: Option<String>,
    pub response: Option<String>,
    pub guessed_color: Option<String>,
    pub is_correct: bool,
}

pub fn project_for_display(battle: &Battle) -> BattleDetailView {
    BattleDetailView {
        battle_id: battle.battle_id.clone(),
        model_a: battle.model_a.name.clone(),
        model_b: battle.model_b.name.clone(),
        plaintext_color: battle.plaintext_color.clone(),
        started_at: battle.timestamp_start,
        ended_at: battle.timestamp_end,
        outcome: outcome_label(battle),
        winner: battle.winner().map(str::to_string),
        rounds: battle.rounds.iter().map(project_round).collect(),
    }
}

fn outcome_label(battle: &Battle) -> String {
    match battle.winner() {
        Some(name) => format!("{} wins", name),
        None if battle.battle_outcome.is_some() => "Tie".to_string(),
        None => MISSING_OUTCOME.to_string(),
    }
}

fn project_round(round: &Round) -> RoundView {
    RoundView {
        round_number: round.round_number,
        obfuscator: round.obfuscator_model.clone(),
        deobfuscator: round.deobfuscator_model.clone(),
        attacker: round.attacker_model.clone(),
        obfuscated_text: round.obfuscated_text.clone(),
        instructions: round.instructions_list.clone(),
        obfuscation: round.obfuscation.as_ref().map(project_obfuscation),
        ally_decoding: round.ally_decoding.as_ref().map(project_ally_decoding),
        attempts: round.attempts.iter().map(project_attempt).collect(),
        succeeded_on_attempt: round.attacker_succeeded_on_attempt,
        summary: attack_summary(round.attacker_succeeded_on_attempt),
    }
}

fn project_obfuscation(exchange: &ObfuscationExchange) -> ObfuscationView {
    ObfuscationView {
        prompt: exchange.prompt.clone(),
        response: exchange.response.clone(),
        parsed_obfuscated_text: exchange.parsed_obfuscated_text.clone(),
        parsed_instructions: exchange.parsed_instructions.clone(),
    }
}

fn project_ally_decoding(exchange: &AllyDecodingExchange) -> AllyDecodingView {
    AllyDecodingView {
        prompt: exchange.prompt.clone(),
        response: exchange.response.clone(),
        guessed_color: exchange.parsed_deobfuscated_color.clone(),
        is_correct: exchange.is_correct_deobfuscation,
    }
}

fn project_attempt(attempt: &AttackAttempt) -> AttemptView {
    AttemptView {
        attempt_number: attempt.attempt_number,
        instructions_revealed: attempt.instructions_provided_percentage,
        prompt: attempt.prompt.clone(),
        response: attempt.response.clone(),
        guessed_color: attempt.guessed_color.clone(),
        is_correct: attempt.is_correct,
    }
}

fn attack_summary(succeeded_on: Option<u32>) -> String {
    match succeeded_on {
        Some(attempt) => format!("Attacker succeeded on attempt {}", attempt),
        None => "Attacker did not succeed".to_string(),
    }
}
