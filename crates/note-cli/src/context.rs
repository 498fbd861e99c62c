use std::path::PathBuf;

use anyhow::Context;
use note_config::NoteConfig;
use note_dashboard::MemoryStore;
use note_reflect::ReflectionEngine;

use crate::cli::GlobalFlags;

/// Everything a store-backed command needs.
pub struct AppContext {
    pub config: NoteConfig,
    pub data_path: PathBuf,
    pub store: MemoryStore,
    pub engine: ReflectionEngine,
}

impl AppContext {
    /// Load the journal snapshot named by `--data` or `general.data_path`.
    pub fn open(config: NoteConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let data_path = flags
            .data
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.general.data_path));
        let store = MemoryStore::load(&data_path)
            .with_context(|| format!("failed to open journal store {}", data_path.display()))?;
        let engine = ReflectionEngine::from_config(&config.enrichment);

        Ok(Self {
            config,
            data_path,
            store,
            engine,
        })
    }

    /// Persist the store after a mutation.
    pub fn save(&self) -> anyhow::Result<()> {
        self.store
            .save(&self.data_path)
            .with_context(|| format!("failed to save journal store {}", self.data_path.display()))
    }
}
