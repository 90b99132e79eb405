//! JSON-inläsning av personposter

use std::collections::hash_map::DefaultHasher;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};

use crate::models::PersonNode;
use crate::services::PersonIndex;
use crate::utils::error::LineageResult;

/// Oföränderlig ögonblicksbild av alla personer i en hämtning
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub nodes: Vec<PersonNode>,
    pub loaded_at: DateTime<Utc>,
    pub source: Option<PathBuf>,
}

impl Snapshot {
    pub fn new(nodes: Vec<PersonNode>) -> Self {
        Self {
            nodes,
            loaded_at: Utc::now(),
            source: None,
        }
    }

    pub fn index(&self) -> PersonIndex {
        PersonIndex::build(&self.nodes)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Innehållshash, används som version vid memoisering
    ///
    /// Samma poster i samma ordning ger samma värde oavsett inläsningstid.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.nodes.len().hash(&mut hasher);
        for node in &self.nodes {
            node.id.hash(&mut hasher);
            node.father_id.hash(&mut hasher);
            node.mother_id.hash(&mut hasher);
            node.name.hash(&mut hasher);
            node.gender.hash(&mut hasher);
            node.generation.hash(&mut hasher);
            node.hid.hash(&mut hasher);
            node.descendants_count.hash(&mut hasher);
            for (key, value) in &node.extra {
                key.hash(&mut hasher);
                value.to_string().hash(&mut hasher);
            }
        }
        hasher.finish()
    }
}

/// Läser ögonblicksbilder från JSON
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Läs en JSON-fil med en array av personer
    pub fn load_file(path: &Path) -> anyhow::Result<Snapshot> {
        let file = File::open(path)
            .with_context(|| format!("Kunde inte öppna ögonblicksbild: {}", path.display()))?;
        let mut snapshot = Self::load_reader(BufReader::new(file))
            .with_context(|| format!("Kunde inte läsa ögonblicksbild: {}", path.display()))?;
        snapshot.source = Some(path.to_path_buf());

        tracing::info!("Läste {} personer från {}", snapshot.len(), path.display());
        Ok(snapshot)
    }

    pub fn load_str(content: &str) -> LineageResult<Snapshot> {
        let nodes: Vec<PersonNode> = serde_json::from_str(content)?;
        Ok(Snapshot::new(nodes))
    }

    pub fn load_reader<R: Read>(reader: R) -> LineageResult<Snapshot> {
        let nodes: Vec<PersonNode> = serde_json::from_reader(reader)?;
        Ok(Snapshot::new(nodes))
    }
}
