//! Detect which tracked habits an entry talks about.

use std::sync::Arc;

use note_core::entities::HabitRef;

use crate::lexicon::ReflectionTables;

/// Name words must be longer than this to count on their own.
const MIN_WORD_CHARS: usize = 3;

pub struct HabitMatcher {
    tables: Arc<ReflectionTables>,
}

impl HabitMatcher {
    pub fn new(tables: Arc<ReflectionTables>) -> Self {
        Self { tables }
    }

    /// Ids of mentioned habits, in input order and without duplicates.
    #[must_use]
    pub fn detect(&self, text: &str, habits: &[HabitRef]) -> Vec<String> {
        let lower = text.to_lowercase();
        let context = self.has_completion_context(&lower);

        let mut detected: Vec<String> = Vec::new();
        for habit in habits {
            if detected.contains(&habit.id) || !is_mentioned(&lower, &habit.name) {
                continue;
            }
            // Mentions count as completions whether or not a phrase was found.
            tracing::debug!(habit = %habit.id, completion_context = context, "habit mentioned");
            detected.push(habit.id.clone());
        }
        detected
    }

    /// Whether `text` contains any completion phrase.
    #[must_use]
    pub fn has_completion_context(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.tables
            .completion_phrases()
            .iter()
            .any(|phrase| lower.contains(phrase.as_str()))
    }
}

/// `text` must already be lowercase.
fn is_mentioned(text: &str, name: &str) -> bool {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return false;
    }
    text.contains(&name)
        || name
            .split(' ')
            .filter(|word| word.chars().count() > MIN_WORD_CHARS)
            .any(|word| text.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn matcher() -> HabitMatcher {
        HabitMatcher::new(Arc::new(ReflectionTables::standard()))
    }

    fn habits() -> Vec<HabitRef> {
        vec![
            HabitRef::new("1", "Exercise"),
            HabitRef::new("2", "Read a book"),
            HabitRef::new("3", "Meditation"),
        ]
    }

    #[test]
    fn detects_in_input_order() {
        let text = "Today I did my exercise routine and practiced meditation for 10 minutes.";
        assert_eq!(matcher().detect(text, &habits()), vec!["1", "3"]);
    }

    #[test]
    fn unrelated_text_detects_nothing() {
        let text = "I went to the store and bought groceries.";
        assert!(matcher().detect(text, &habits()).is_empty());
    }

    #[test]
    fn long_name_word_is_enough() {
        // "book" is longer than three characters; "read" alone would also match
        let text = "Finished that book finally.";
        assert_eq!(matcher().detect(text, &habits()), vec!["2"]);
    }

    #[test]
    fn short_name_words_do_not_match_alone() {
        let habits = vec![HabitRef::new("9", "Go to gym")];
        assert!(matcher().detect("I will go somewhere", &habits).is_empty());
        assert_eq!(matcher().detect("Went to the go to gym class", &habits), vec!["9"]);
    }

    #[test]
    fn duplicates_reported_once() {
        let habits = vec![HabitRef::new("1", "Exercise"), HabitRef::new("1", "Exercise")];
        assert_eq!(matcher().detect("exercise", &habits), vec!["1"]);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_names_never_match(#[case] name: &str) {
        let habits = vec![HabitRef::new("x", name)];
        assert!(matcher().detect("anything at all", &habits).is_empty());
    }

    #[rstest]
    #[case("I did my stretches", true)]
    #[case("WENT for a run", true)]
    #[case("Nothing happened", false)]
    fn completion_context(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(matcher().has_completion_context(text), expected);
    }

    #[test]
    fn mention_without_context_still_detected() {
        let habits = vec![HabitRef::new("3", "Meditation")];
        assert!(!matcher().has_completion_context("thinking about meditation"));
        assert_eq!(matcher().detect("thinking about meditation", &habits), vec!["3"]);
    }
}
