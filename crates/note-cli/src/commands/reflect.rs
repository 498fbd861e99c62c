use note_core::entities::HabitRef;
use note_reflect::ReflectionEngine;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReflectArgs;
use crate::commands::shared::entry_content;
use crate::output::output;

/// Handle `neuralnote reflect`.
pub async fn handle(
    args: &ReflectArgs,
    engine: &ReflectionEngine,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let content = entry_content(args.content.as_deref())?;
    let habits = parse_habits(&args.habits);
    let reflection = engine.reflect(&content, &habits).await;
    output(&reflection, flags.format)
}

/// `ID:NAME` keeps the given id; a bare `NAME` gets its 1-based position.
fn parse_habits(specs: &[String]) -> Vec<HabitRef> {
    specs
        .iter()
        .enumerate()
        .map(|(i, raw)| match raw.split_once(':') {
            Some((id, name)) if !id.trim().is_empty() => HabitRef::new(id.trim(), name.trim()),
            _ => HabitRef::new((i + 1).to_string(), raw.trim()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_ids_and_positions() {
        let specs = vec![
            "7:Running".to_string(),
            "Reading".to_string(),
            ":Journal".to_string(),
        ];
        assert_eq!(
            parse_habits(&specs),
            vec![
                HabitRef::new("7", "Running"),
                HabitRef::new("2", "Reading"),
                HabitRef::new("3", ":Journal"),
            ]
        );
    }
}
