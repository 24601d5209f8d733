//! Batch classification of tasks read from JSON.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use eisenhower_core::{Config, TaskInput};

#[derive(Args)]
pub struct BatchArgs {
    /// JSON file holding an array of tasks ("-" reads stdin)
    pub file: PathBuf,
    /// Ask the refinement service about borderline results
    #[arg(long, conflicts_with = "no_refine")]
    pub refine: bool,
    /// Never call the refinement service
    #[arg(long)]
    pub no_refine: bool,
}

pub fn run(args: BatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let refine = super::refine_enabled(&config, args.refine, args.no_refine);

    let content = if args.file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.file)?
    };
    let tasks = parse_tasks(&content)?;
    tracing::debug!(count = tasks.len(), refine, "classifying batch");

    let classifier = super::classifier(&config);
    let results = super::runtime()?.block_on(classifier.classify_many(&tasks, refine));

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

fn parse_tasks(content: &str) -> Result<Vec<TaskInput>, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_with_optional_fields() {
        let tasks = parse_tasks(
            r#"[
                {"text": "file receipts"},
                {"text": "board prep", "due": "2026-04-01T17:00:00Z", "tags": ["finance"], "estimate_mins": 90}
            ]"#,
        )
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks[0].due.is_none());
        assert_eq!(tasks[1].tags, vec!["finance".to_string()]);
        assert_eq!(tasks[1].estimate_mins, Some(90));
    }

    #[test]
    fn rejects_non_array() {
        assert!(parse_tasks(r#"{"text": "x"}"#).is_err());
    }
}
