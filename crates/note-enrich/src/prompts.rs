//! Prompt construction for the three enrichment tasks.

/// A system + user message pair with sampling limits.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Ask for exactly one lowercase emotion word.
#[must_use]
pub fn emotion(text: &str) -> Prompt {
    Prompt {
        system: "You classify the primary emotion of personal journal entries. \
                 Reply with exactly one lowercase English word and nothing else.",
        user: format!("Journal entry:\n{text}\n\nPrimary emotion:"),
        max_tokens: 5,
        temperature: 0.2,
    }
}

/// Ask for a short, objective, third-person synopsis.
#[must_use]
pub fn summary(text: &str) -> Prompt {
    Prompt {
        system: "You write objective summaries of personal journal entries in one or two \
                 sentences. Do not copy the entry verbatim and do not add commentary.",
        user: format!("Journal entry:\n{text}\n\nObjective summary:"),
        max_tokens: 80,
        temperature: 0.3,
    }
}

/// Ask for a single supportive sentence of at most 20 words.
#[must_use]
pub fn affirmation(emotion_description: &str) -> Prompt {
    Prompt {
        system: "You write warm, supportive affirmations for people keeping a journal.",
        user: format!(
            "Write one affirmation sentence of at most 20 words for someone who is \
             {emotion_description}. Reply with the affirmation only."
        ),
        max_tokens: 40,
        temperature: 0.7,
    }
}
