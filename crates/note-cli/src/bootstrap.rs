use anyhow::Context;

/// Load layered configuration, reading a `.env` in the working directory first.
pub fn load_config() -> anyhow::Result<note_config::NoteConfig> {
    let config = note_config::NoteConfig::load_with_dotenv()
        .context("failed to load neuralnote configuration")?;

    if config.enrichment.enabled && !config.enrichment.is_configured() {
        tracing::warn!(
            "enrichment is enabled but NEURALNOTE_ENRICHMENT__API_KEY is empty; using local reflection"
        );
    }
    Ok(config)
}
