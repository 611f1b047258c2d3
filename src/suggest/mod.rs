//! Suggestion rules mapping a record's priority and type to advice.

use serde::Serialize;

use crate::lookup::Record;

/// Fixed priority-name-to-score table. Names outside the table score 0.
pub const PRIORITY_SCORES: [(&str, u8); 5] =
    [("Highest", 5), ("High", 4), ("Medium", 3), ("Low", 2), ("Lowest", 1)];

/// Scores at or below this threshold take the low-urgency branch.
pub const ESCALATION_THRESHOLD: u8 = 3;

/// Urgency band derived from a record's priority field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyBand {
    /// Can wait for regular planning.
    Low,
    /// Needs immediate attention.
    High,
}

/// Category of a type-specific suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fault-isolation advice for bugs.
    Debugging,
    /// Breakdown-and-estimate advice for stories.
    Implementation,
}

/// Tag classifying where a suggestion came from in the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionTag {
    /// Emitted by the urgency-banding rule.
    Urgency(UrgencyBand),
    /// Emitted by the type-augmentation rule.
    Category(Category),
}

/// One display message + recommended action pair produced by the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionEntry {
    /// The display message.
    pub message: String,
    /// The recommended action.
    pub action: String,
    /// Which rule produced this entry.
    pub tag: SuggestionTag,
}

impl SuggestionEntry {
    fn new(message: &str, action: &str, tag: SuggestionTag) -> Self {
        Self { message: message.to_string(), action: action.to_string(), tag }
    }
}

/// Map a priority name through the fixed score table.
///
/// Unknown or missing priorities score 0, which lands in the low-urgency
/// band.
#[must_use]
pub fn priority_score(priority: Option<&str>) -> u8 {
    priority
        .and_then(|name| {
            PRIORITY_SCORES.iter().find(|(candidate, _)| *candidate == name).map(|(_, s)| *s)
        })
        .unwrap_or(0)
}

/// Produce the ordered suggestion list for a record.
///
/// Pure and deterministic: exactly one urgency entry first, then one
/// type-specific entry when the type is exactly `"Bug"` or `"Story"`.
#[must_use]
pub fn suggest(record: &Record) -> Vec<SuggestionEntry> {
    let mut entries = Vec::new();

    if priority_score(record.priority.as_deref()) <= ESCALATION_THRESHOLD {
        entries.push(SuggestionEntry::new(
            "This is a low priority issue. Consider addressing after critical items.",
            "Schedule for next sprint",
            SuggestionTag::Urgency(UrgencyBand::Low),
        ));
    } else {
        entries.push(SuggestionEntry::new(
            "This is a high priority issue requiring immediate attention.",
            "Escalate to team lead and address immediately",
            SuggestionTag::Urgency(UrgencyBand::High),
        ));
    }

    match record.issue_type.as_deref() {
        Some("Bug") => entries.push(SuggestionEntry::new(
            "Review recent code changes and check error logs",
            "Run diagnostic tests and reproduce the issue",
            SuggestionTag::Category(Category::Debugging),
        )),
        Some("Story") => entries.push(SuggestionEntry::new(
            "Break down into smaller tasks and estimate effort",
            "Create subtasks and assign to team members",
            SuggestionTag::Category(Category::Implementation),
        )),
        _ => {}
    }

    entries
}
