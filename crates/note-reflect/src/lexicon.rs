//! Immutable keyword, template and phrase tables.
//!
//! [`ReflectionTables`] is built once (usually via [`ReflectionTables::standard`])
//! and shared read-only between components behind an `Arc`.

use std::collections::HashMap;

use note_core::enums::Emotion;
use note_core::errors::CoreError;

const HAPPY: &[&str] = &[
    "happy", "joy", "excited", "grateful", "thankful", "wonderful", "amazing", "great", "blessed",
    "delighted", "cheerful", "content",
];
const SAD: &[&str] = &[
    "sad", "down", "depressed", "unhappy", "disappointed", "lonely", "melancholy", "gloomy",
    "heartbroken",
];
const ANXIOUS: &[&str] = &[
    "anxious", "worried", "nervous", "stressed", "overwhelmed", "tense", "uneasy", "afraid",
    "fearful",
];
const ANGRY: &[&str] = &[
    "angry", "frustrated", "annoyed", "irritated", "mad", "furious", "upset",
];
const CALM: &[&str] = &[
    "calm", "peaceful", "relaxed", "serene", "tranquil", "at ease", "mindful",
];
const MOTIVATED: &[&str] = &[
    "motivated", "inspired", "determined", "focused", "energized", "productive", "ambitious",
];
const TIRED: &[&str] = &[
    "tired", "exhausted", "drained", "fatigued", "worn out", "sleepy",
];

const AFFIRM_HAPPY: &[&str] = &[
    "Your positive energy is contagious. Keep embracing the joy in each moment!",
    "What a wonderful outlook! Continue nurturing this happiness.",
    "Your gratitude opens doors to even more blessings.",
];
const AFFIRM_SAD: &[&str] = &[
    "It's okay to feel this way. Every storm eventually passes, and brighter days are ahead.",
    "Be gentle with yourself. Your feelings are valid, and healing takes time.",
    "Remember, you are stronger than you know. This too shall pass.",
];
const AFFIRM_ANXIOUS: &[&str] = &[
    "Take a deep breath. You've overcome challenges before, and you can do it again.",
    "One step at a time. Focus on what you can control in this moment.",
    "Your worries don't define you. You have the strength to navigate through this.",
];
const AFFIRM_ANGRY: &[&str] = &[
    "It's healthy to acknowledge your frustrations. Channel this energy into positive action.",
    "Your feelings are valid. Take time to process and find constructive outlets.",
    "Breathe through it. You have the wisdom to respond thoughtfully.",
];
const AFFIRM_CALM: &[&str] = &[
    "Your inner peace is a gift. Continue to cultivate this tranquility.",
    "In stillness, we find clarity. Your centered mindset serves you well.",
    "This balance you've found is precious. Protect and nurture it.",
];
const AFFIRM_MOTIVATED: &[&str] = &[
    "Your drive is inspiring! Keep channeling this energy toward your goals.",
    "You're on the right track. Trust your journey and keep moving forward.",
    "This momentum will take you far. Believe in your capabilities!",
];
const AFFIRM_TIRED: &[&str] = &[
    "Rest is not laziness—it's essential. Honor your body's need for recovery.",
    "You've been working hard. Give yourself permission to recharge.",
    "Tomorrow is a new day. Take the rest you deserve tonight.",
];
const AFFIRM_NEUTRAL: &[&str] = &[
    "Every day is a new opportunity for growth and discovery.",
    "You're doing better than you think. Keep going!",
    "Trust the process. Good things are coming your way.",
];

const COMPLETION_PHRASES: &[&str] = &[
    "did my", "completed my", "finished my", "went to", "went for", "practiced", "worked on",
    "did some", "went", "ate", "drank", "read", "wrote", "exercised", "ran", "walked",
    "meditated", "studied", "learned", "cooked", "cleaned", "organized",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// Keyword, template and phrase tables used by every reflection component.
#[derive(Debug, Clone)]
pub struct ReflectionTables {
    keywords: Vec<(Emotion, Vec<String>)>,
    affirmations: HashMap<String, Vec<String>>,
    descriptions: HashMap<Emotion, String>,
    completion_phrases: Vec<String>,
}

impl ReflectionTables {
    /// The built-in English tables.
    #[must_use]
    pub fn standard() -> Self {
        let keywords = vec![
            (Emotion::Happy, owned(HAPPY)),
            (Emotion::Sad, owned(SAD)),
            (Emotion::Anxious, owned(ANXIOUS)),
            (Emotion::Angry, owned(ANGRY)),
            (Emotion::Calm, owned(CALM)),
            (Emotion::Motivated, owned(MOTIVATED)),
            (Emotion::Tired, owned(TIRED)),
        ];

        let affirmations = [
            (Emotion::Happy, AFFIRM_HAPPY),
            (Emotion::Sad, AFFIRM_SAD),
            (Emotion::Anxious, AFFIRM_ANXIOUS),
            (Emotion::Angry, AFFIRM_ANGRY),
            (Emotion::Calm, AFFIRM_CALM),
            (Emotion::Motivated, AFFIRM_MOTIVATED),
            (Emotion::Tired, AFFIRM_TIRED),
            (Emotion::Neutral, AFFIRM_NEUTRAL),
        ]
        .into_iter()
        .map(|(emotion, templates)| (emotion.as_str().to_string(), owned(templates)))
        .collect();

        let descriptions = [
            (Emotion::Happy, "feeling happy and joyful"),
            (Emotion::Sad, "feeling sad or down"),
            (Emotion::Anxious, "feeling anxious or worried"),
            (Emotion::Angry, "feeling angry or frustrated"),
            (Emotion::Calm, "feeling calm and peaceful"),
            (Emotion::Motivated, "feeling motivated and driven"),
            (Emotion::Tired, "feeling tired or exhausted"),
            (Emotion::Neutral, "having an ordinary day"),
        ]
        .into_iter()
        .map(|(emotion, text)| (emotion, text.to_string()))
        .collect();

        Self {
            keywords,
            affirmations,
            descriptions,
            completion_phrases: owned(COMPLETION_PHRASES),
        }
    }

    /// Build custom tables.
    ///
    /// Keywords and phrases are lowercased and deduplicated per category so
    /// scores count distinct matches. `keywords` order is the tie-break order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if there is no non-empty `neutral`
    /// affirmation list, any affirmation list is empty, or `Neutral` appears
    /// as a scored category.
    pub fn new(
        keywords: Vec<(Emotion, Vec<String>)>,
        affirmations: HashMap<String, Vec<String>>,
        descriptions: HashMap<Emotion, String>,
        completion_phrases: Vec<String>,
    ) -> Result<Self, CoreError> {
        if keywords.iter().any(|(emotion, _)| *emotion == Emotion::Neutral) {
            return Err(CoreError::Validation(
                "neutral is the fallback label and cannot be scored".into(),
            ));
        }
        if !affirmations.contains_key(Emotion::Neutral.as_str()) {
            return Err(CoreError::Validation(
                "affirmation templates must include a neutral list".into(),
            ));
        }
        if let Some((label, _)) = affirmations.iter().find(|(_, list)| list.is_empty()) {
            return Err(CoreError::Validation(format!(
                "affirmation list for '{label}' is empty"
            )));
        }

        let keywords = keywords
            .into_iter()
            .map(|(emotion, words)| (emotion, normalize(words)))
            .collect();

        Ok(Self {
            keywords,
            affirmations,
            descriptions,
            completion_phrases: normalize(completion_phrases),
        })
    }

    /// Scored categories with their keywords, in tie-break order.
    #[must_use]
    pub fn keywords(&self) -> &[(Emotion, Vec<String>)] {
        &self.keywords
    }

    /// Templates for `emotion`, falling back to the neutral list.
    #[must_use]
    pub fn affirmations_for(&self, emotion: &str) -> &[String] {
        self.affirmations
            .get(emotion)
            .or_else(|| self.affirmations.get(Emotion::Neutral.as_str()))
            .map_or(&[], Vec::as_slice)
    }

    /// Descriptive phrase for a known emotion, or `None` for free-form labels.
    #[must_use]
    pub fn description_for(&self, emotion: &str) -> Option<&str> {
        let known = emotion.parse::<Emotion>().ok()?;
        self.descriptions.get(&known).map(String::as_str)
    }

    #[must_use]
    pub fn completion_phrases(&self) -> &[String] {
        &self.completion_phrases
    }
}

impl Default for ReflectionTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn normalize(words: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        let word = word.trim().to_lowercase();
        if !word.is_empty() && !out.contains(&word) {
            out.push(word);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_cover_every_label() {
        let tables = ReflectionTables::standard();
        for emotion in Emotion::ALL {
            assert_eq!(tables.affirmations_for(emotion.as_str()).len(), 3);
            assert!(tables.description_for(emotion.as_str()).is_some());
        }
        assert_eq!(tables.keywords().len(), 7);
        assert_eq!(tables.completion_phrases().len(), 22);
    }

    #[test]
    fn tired_templates_keep_their_wording() {
        let tables = ReflectionTables::standard();
        assert_eq!(
            tables.affirmations_for("tired")[0],
            "Rest is not laziness—it's essential. Honor your body's need for recovery."
        );
    }

    #[test]
    fn unknown_emotion_uses_neutral_templates() {
        let tables = ReflectionTables::standard();
        assert_eq!(
            tables.affirmations_for("wistful"),
            tables.affirmations_for("neutral")
        );
        assert!(tables.description_for("wistful").is_none());
    }

    #[test]
    fn new_rejects_missing_neutral() {
        let result = ReflectionTables::new(
            vec![(Emotion::Happy, vec!["joy".into()])],
            HashMap::from([("happy".to_string(), vec!["Yay".to_string()])]),
            HashMap::new(),
            vec![],
        );
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn new_rejects_scored_neutral() {
        let result = ReflectionTables::new(
            vec![(Emotion::Neutral, vec!["meh".into()])],
            HashMap::from([("neutral".to_string(), vec!["Okay".to_string()])]),
            HashMap::new(),
            vec![],
        );
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn new_deduplicates_keywords() {
        let tables = ReflectionTables::new(
            vec![(
                Emotion::Happy,
                vec!["Joy".into(), "joy".into(), " glad ".into(), String::new()],
            )],
            HashMap::from([("neutral".to_string(), vec!["Okay".to_string()])]),
            HashMap::new(),
            vec!["Did My".into()],
        )
        .unwrap();
        assert_eq!(tables.keywords()[0].1, vec!["joy", "glad"]);
        assert_eq!(tables.completion_phrases(), ["did my"]);
    }
}
