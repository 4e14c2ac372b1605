use colored::Colorize;

use crate::domain::{BattleDetailView, BattleSummary};
use crate::domain::projection::RoundView;
use crate::rating::LeaderboardEntry;

pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut report = String::new();
    report.push_str(&format!("{}\n", "=== Model Leaderboard ===".bold()));
    report.push_str(&format!(
        "{:>4}  {:<40} {:>8} {:>6}\n",
        "Rank", "Model", "Elo", "Games"
    ));
    report.push_str(&"-".repeat(62));
    report.push('\n');

    if entries.is_empty() {
        report.push_str("No rated models yet.\n");
        return report;
    }

    for entry in entries {
        report.push_str(&format!(
            "{:>4}  {:<40} {} {:>6}\n",
            entry.rank,
            entry.name,
            format!("{:>8.1}", entry.rating).cyan(),
            entry.games_played
        ));
    }

    report
}

pub fn render_timeline(summaries: &[BattleSummary]) -> String {
    let mut report = String::new();
    report.push_str(&format!("{}\n", "=== Latest Battles ===".bold()));

    if summaries.is_empty() {
        report.push_str("No battles recorded.\n");
        return report;
    }

    for summary in summaries {
        report.push_str(&format!(
            "{}  {}  {} vs {}  → {}\n",
            summary.started_at.format("%Y-%m-%d %H:%M:%S"),
            summary.battle_id.dimmed(),
            summary.model_a,
            summary.model_b,
            summary.outcome.yellow()
        ));
    }

    report
}

pub fn render_detail(view: &BattleDetailView) -> String {
    let mut report = String::new();
    report.push_str(&format!("{}\n", format!("=== Battle {} ===", view.battle_id).bold()));
    report.push_str(&format!("Model A: {}\n", view.model_a));
    report.push_str(&format!("Model B: {}\n", view.model_b));
    if let Some(color) = &view.plaintext_color {
        report.push_str(&format!("Color:   #{}\n", color));
    }
    report.push_str(&format!("Started: {}\n", view.started_at.to_rfc3339()));
    if let Some(ended_at) = view.ended_at {
        report.push_str(&format!("Ended:   {}\n", ended_at.to_rfc3339()));
    }
    report.push_str(&format!("Outcome: {}\n", view.outcome.green()));

    for round in &view.rounds {
        report.push('\n');
        render_round(&mut report, round);
    }

    report
}

fn render_round(report: &mut String, round: &RoundView) {
    report.push_str(&format!(
        "{}\n",
        format!("--- Round {} ---", round.round_number).bold()
    ));
    report.push_str(&format!(
        "Obfuscator: {}  Deobfuscator: {}  Attacker: {}\n",
        round.obfuscator, round.deobfuscator, round.attacker
    ));
    push_optional(report, "Obfuscated text", round.obfuscated_text.as_deref());
    push_optional(report, "Instructions", round.instructions.as_deref());

    if let Some(obfuscation) = &round.obfuscation {
        report.push_str("[Obfuscation]\n");
        push_optional(report, "  Prompt", obfuscation.prompt.as_deref());
        push_optional(report, "  Response", obfuscation.response.as_deref());
    }

    if let Some(ally) = &round.ally_decoding {
        report.push_str("[Ally decoding]\n");
        push_optional(report, "  Prompt", ally.prompt.as_deref());
        push_optional(report, "  Response", ally.response.as_deref());
        report.push_str(&format!(
            "  Guess: {} ({})\n",
            ally.guessed_color.as_deref().unwrap_or("none"),
            correctness(ally.is_correct)
        ));
    }

    for attempt in &round.attempts {
        report.push_str(&format!(
            "[Attempt {}] {:.0}% of instructions, guess {} ({})\n",
            attempt.attempt_number,
            attempt.instructions_revealed * 100.0,
            attempt.guessed_color.as_deref().unwrap_or("none"),
            correctness(attempt.is_correct)
        ));
    }

    report.push_str(&format!("{}\n", round.summary.italic()));
}

fn push_optional(report: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        report.push_str(&format!("{}: {}\n", label, value));
    }
}

fn correctness(is_correct: bool) -> String {
    if is_correct {
        "correct".green().to_string()
    } else {
        "wrong".red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project_for_display;
    use crate::domain::test_support::battle;

    #[test]
    fn test_leaderboard_rows() {
        let entries = vec![
            LeaderboardEntry {
                rank: 1,
                name: "X".to_string(),
                rating: 1516.0,
                games_played: 1,
            },
            LeaderboardEntry {
                rank: 2,
                name: "Y".to_string(),
                rating: 1484.0,
                games_played: 1,
            },
        ];

        let report = render_leaderboard(&entries);

        assert!(report.contains("1516.0"));
        assert!(report.contains("1484.0"));
        let x_line = report.lines().find(|l| l.contains(" X ")).unwrap();
        assert!(x_line.trim_start().starts_with('1'));
    }

    #[test]
    fn test_empty_views() {
        assert!(render_leaderboard(&[]).contains("No rated models yet."));
        assert!(render_timeline(&[]).contains("No battles recorded."));
    }

    #[test]
    fn test_detail_skips_missing_blocks() {
        let record = battle("b1", "X", "Y", "X_wins", "2025-01-01T00:00:00Z");
        let report = render_detail(&project_for_display(&record));

        assert!(report.contains("b1"));
        assert!(report.contains("X wins"));
        assert!(!report.contains("[Ally decoding]"));
        assert!(!report.contains("Ended:"));
    }
}
