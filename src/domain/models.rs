use chrono::{DateTime, Utc};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One recorded battle between two models, as written to `data.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battle {
    pub battle_id: String,
    pub timestamp_start: DateTime<Utc>,
    #[serde(default)]
    pub timestamp_end: Option<DateTime<Utc>>,
    #[serde(rename = "model_A_info")]
    pub model_a: ModelInfo,
    #[serde(rename = "model_B_info")]
    pub model_b: ModelInfo,
    #[serde(default)]
    pub plaintext_color: Option<String>,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub battle_outcome: Option<String>,
}

impl Battle {
    /// Resolve the recorded outcome string against the two participants.
    /// Anything that names neither side counts as a tie.
    pub fn outcome(&self) -> Outcome {
        Outcome::resolve(
            self.battle_outcome.as_deref(),
            &self.model_a.name,
            &self.model_b.name,
        )
    }

    pub fn participants(&self) -> (&str, &str) {
        (self.model_a.name.as_str(), self.model_b.name.as_str())
    }

    /// Name of the winning model, if the battle was not a tie
    pub fn winner(&self) -> Option<&str> {
        match self.outcome() {
            Outcome::AWins => Some(self.model_a.name.as_str()),
            Outcome::BWins => Some(self.model_b.name.as_str()),
            Outcome::Tie => None,
        }
    }
}

/// Participant descriptor for one side of a battle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_in_round1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_in_round2: Option<String>,
}

/// Battle result from model A's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    AWins,
    BWins,
    Tie,
}

impl Outcome {
    pub fn resolve(raw: Option<&str>, model_a: &str, model_b: &str) -> Self {
        let Some(raw) = raw else {
            return Outcome::Tie;
        };

        if raw == win_label(model_a) {
            Outcome::AWins
        } else if raw == win_label(model_b) {
            Outcome::BWins
        } else {
            if raw != "tie" {
                debug!("Unrecognized battle outcome {:?}, counting as tie", raw);
            }
            Outcome::Tie
        }
    }

    /// Actual scores for (A, B)
    pub fn scores(&self) -> (f64, f64) {
        match self {
            Outcome::AWins => (1.0, 0.0),
            Outcome::BWins => (0.0, 1.0),
            Outcome::Tie => (0.5, 0.5),
        }
    }
}

fn win_label(name: &str) -> String {
    format!("{}_wins", name)
}

/// One round: one model obfuscates (and its ally decodes), the other attacks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub round_number: u32,
    #[serde(default)]
    pub obfuscator_model: String,
    #[serde(default)]
    pub deobfuscator_model: String,
    #[serde(default)]
    pub attacker_model: String,
    #[serde(default)]
    pub obfuscated_text: Option<String>,
    #[serde(default)]
    pub instructions_list: Option<String>,
    #[serde(
        rename = "llm1_conversation",
        default,
        deserialize_with = "empty_object_as_none"
    )]
    pub obfuscation: Option<ObfuscationExchange>,
    #[serde(
        rename = "llm2_conversation",
        default,
        deserialize_with = "empty_object_as_none"
    )]
    pub ally_decoding: Option<AllyDecodingExchange>,
    #[serde(rename = "llm3_attempts", default)]
    pub attempts: Vec<AttackAttempt>,
    #[serde(default)]
    pub attacker_succeeded_on_attempt: Option<u32>,
}

/// Obfuscator prompt/response and what was parsed out of it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObfuscationExchange {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub parsed_obfuscated_text: Option<String>,
    #[serde(default)]
    pub parsed_instructions: Option<String>,
}

/// Ally decoder prompt/response and its guess
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllyDecodingExchange {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub parsed_deobfuscated_color: Option<String>,
    #[serde(default)]
    pub is_correct_deobfuscation: bool,
}

/// A single attacker guess
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackAttempt {
    pub attempt_number: u32,
    #[serde(default)]
    pub instructions_provided_percentage: f64,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub guessed_color: Option<String>,
    #[serde(default)]
    pub is_correct: bool,
}

/// The recorder writes `{}` for exchanges that never happened.
fn empty_object_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(other) => serde_json::from_value(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
