use serde::{Deserialize, Serialize};

/// Identifies a communicating peer by name and numeric id.
///
/// The name is the matching key for admission rules; the id is a
/// caller-chosen value (the process id by default) carried along for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerId {
    name: String,
    id: u64,
}

impl PeerId {
    /// Peer id for the current process, with an empty name.
    pub fn local() -> Self {
        PeerId {
            name: String::new(),
            id: u64::from(std::process::id()),
        }
    }

    pub fn new(name: impl Into<String>, id: u64) -> Self {
        PeerId {
            name: name.into(),
            id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}
