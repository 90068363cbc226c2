//! Letter and fragment frequency command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use classic_crypto::stats::letter_stats;

use super::CommandExecutor;

/// Count letters or longer fragments of a text.
#[derive(Args, Debug)]
pub struct StatsCommand {
    /// Fragment length (1 for single letters)
    #[arg(short, long, default_value_t = 1)]
    pub length: usize,

    /// Only count fragments starting with this
    #[arg(short, long, default_value = "")]
    pub starts_with: String,

    /// Only count fragments ending with this
    #[arg(short, long, default_value = "")]
    pub ends_with: String,

    /// Print only the most common fragments
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Text to analyse
    pub text: String,
}

#[derive(Serialize)]
struct Row<'a> {
    fragment: &'a str,
    count: usize,
    percentage: f64,
}

#[derive(Serialize)]
struct Report<'a> {
    total: usize,
    fragments: Vec<Row<'a>>,
}

impl CommandExecutor for StatsCommand {
    fn output(&self) -> Result<String> {
        let stats = letter_stats(&self.text, self.length, &self.starts_with, &self.ends_with)
            .context("Invalid statistics parameters")?;

        let shown = match self.top {
            Some(limit) => stats.most_common(limit),
            None => &stats.fragments,
        };
        let report = Report {
            total: stats.total,
            fragments: shown
                .iter()
                .map(|f| Row {
                    fragment: &f.fragment,
                    count: f.count,
                    percentage: f.percentage(stats.total),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::Value;

    const SAMPLE: &str = "Hello. My Name is Inigo Monotoya. You killed my father. Prepare to die.";

    fn report(command: &StatsCommand) -> Value {
        serde_json::from_str(&command.output().unwrap()).unwrap()
    }

    #[test]
    fn test_top_letters() {
        let command = StatsCommand {
            length: 1,
            starts_with: String::new(),
            ends_with: String::new(),
            top: Some(2),
            text: SAMPLE.into(),
        };
        let report = report(&command);
        assert_eq!(report["total"], 55);
        assert_eq!(report["fragments"].as_array().unwrap().len(), 2);
        assert_eq!(report["fragments"][0]["fragment"], "E");
        assert_eq!(report["fragments"][1]["count"], 7);
    }

    #[test]
    fn test_digrams_ending_with() {
        let command = StatsCommand {
            length: 2,
            starts_with: String::new(),
            ends_with: "e".into(),
            top: None,
            text: SAMPLE.into(),
        };
        let report = report(&command);
        assert_eq!(report["total"], 7);
    }

    #[test]
    fn test_zero_length_is_an_error() {
        let command = StatsCommand {
            length: 0,
            starts_with: String::new(),
            ends_with: String::new(),
            top: None,
            text: SAMPLE.into(),
        };
        assert!(command.output().is_err());
    }
}
