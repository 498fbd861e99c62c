use note_config::NoteConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `neuralnote info`.
pub fn handle(config: &NoteConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&note_enrich::provider_info(&config.enrichment), flags.format)
}
