//! Admission rule set: which sources may reach which destinations.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use arbiter_protocol::{PeerId, Verdict};

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("cannot read rules file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse rules file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One entry of the rules document.
#[derive(Debug, Deserialize)]
struct RuleEntry {
    source: NamedPeer,
    destinations: Vec<NamedPeer>,
}

#[derive(Debug, Deserialize)]
struct NamedPeer {
    name: String,
}

/// Immutable source-name → allowed-destination-names map.
#[derive(Debug)]
pub struct RuleSet {
    by_source: HashMap<String, HashSet<String>>,
}

impl RuleSet {
    /// Load a rule set from a JSON document of `{source, destinations}`
    /// entries.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let data = std::fs::read_to_string(path).map_err(|source| RulesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::parse(&data).map_err(|source| RulesError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded {} admission rules from {}", set.by_source.len(), path.display());
        Ok(set)
    }

    fn parse(data: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<RuleEntry> = serde_json::from_str(data)?;
        let by_source = entries
            .into_iter()
            .map(|entry| {
                let destinations = entry.destinations.into_iter().map(|d| d.name).collect();
                (entry.source.name, destinations)
            })
            .collect();
        Ok(RuleSet { by_source })
    }

    /// Decide whether a message from `source` may reach `destination`.
    ///
    /// A known source with an unlisted destination is distinguished from a
    /// source no rule mentions.
    pub fn decide(&self, source: &PeerId, destination: &PeerId) -> Verdict {
        match self.by_source.get(source.name()) {
            Some(allowed) if allowed.contains(destination.name()) => Verdict::Allow,
            Some(_) => Verdict::DisallowedDestination,
            None => Verdict::SourceUnknown,
        }
    }
}

#[cfg(test)]
mod tests;
