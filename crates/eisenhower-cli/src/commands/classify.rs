//! Single-task classification command.

use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use eisenhower_core::{Classification, Config, TaskInput};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Task text
    pub text: String,
    /// Due date (RFC 3339 timestamp, or YYYY-MM-DD for end of that day UTC)
    #[arg(long)]
    pub due: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
    /// Estimated duration in minutes
    #[arg(long)]
    pub estimate: Option<i64>,
    /// Signed nudge added to urgency
    #[arg(long, allow_hyphen_values = true)]
    pub urgency_hint: Option<i64>,
    /// Signed nudge added to importance
    #[arg(long, allow_hyphen_values = true)]
    pub importance_hint: Option<i64>,
    /// Ask the refinement service about borderline results
    #[arg(long, conflicts_with = "no_refine")]
    pub refine: bool,
    /// Never call the refinement service
    #[arg(long)]
    pub no_refine: bool,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ClassifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let refine = super::refine_enabled(&config, args.refine, args.no_refine);
    let json = args.json;
    let task = task_from_args(args)?;

    let classifier = super::classifier(&config);
    let result = super::runtime()?.block_on(classifier.classify(&task, refine));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_human(&result);
    }
    Ok(())
}

fn task_from_args(args: ClassifyArgs) -> Result<TaskInput, Box<dyn std::error::Error>> {
    let due = args.due.as_deref().map(parse_due).transpose()?;
    Ok(TaskInput {
        text: args.text,
        due,
        estimate_mins: args.estimate,
        tags: args
            .tags
            .map(|t| {
                t.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default(),
        urgency_hint: args.urgency_hint,
        importance_hint: args.importance_hint,
    })
}

/// Accept a full RFC 3339 timestamp or a bare date.
pub fn parse_due(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| format!("invalid due date '{raw}': expected RFC 3339 or YYYY-MM-DD"))
}

fn print_human(c: &Classification) {
    println!("Quadrant:   {}", c.quadrant);
    println!("Urgency:    {}", c.urgency);
    println!("Importance: {}", c.importance);
    if !c.reasoning.is_empty() {
        println!("Reasoning:  {}", c.reasoning);
    }
    if c.borderline {
        println!("Borderline: yes");
    }
    if let Some(suggested) = c.ai_suggested {
        println!("Suggested:  {suggested}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_due_accepts_rfc3339() {
        let due = parse_due("2026-04-01T09:30:00+02:00").unwrap();
        assert_eq!(due.hour(), 7);
        assert_eq!(due.minute(), 30);
    }

    #[test]
    fn parse_due_bare_date_is_end_of_day() {
        let due = parse_due("2026-04-01").unwrap();
        assert_eq!(due.day(), 1);
        assert_eq!(due.hour(), 23);
        assert_eq!(due.minute(), 59);
    }

    #[test]
    fn parse_due_rejects_garbage() {
        assert!(parse_due("next tuesday").is_err());
    }
}
