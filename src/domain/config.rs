use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use super::Kind;

/// Configuration for element classification.
///
/// Management trees from different array vendors spell the kind discriminator
/// differently. The built-in spellings cover the canonical tags; this
/// configuration maps additional spellings onto the fixed record kinds. The
/// record family itself is not configurable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extra tag spellings accepted by the builder, keyed by lowercase tag.
    ///
    /// Aliases take precedence over the built-in spellings.
    #[serde(default)]
    tags: BTreeMap<String, Kind>,
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Resolves an element tag to its kind.
    ///
    /// Tags are matched case-insensitively. Configured aliases are consulted
    /// before the built-in spellings; unrecognised tags resolve to `None`.
    #[must_use]
    pub fn kind_of(&self, tag: &str) -> Option<Kind> {
        let tag = tag.to_ascii_lowercase();
        if let Some(kind) = self.tags.get(&tag) {
            return Some(*kind);
        }
        match tag.as_str() {
            "property" => Some(Kind::Property),
            "status" => Some(Kind::Status),
            "redundancy" => Some(Kind::Redundancy),
            "initiator" => Some(Kind::Initiator),
            "host" => Some(Kind::Host),
            "host-group" => Some(Kind::HostGroup),
            "system" => Some(Kind::System),
            _ => None,
        }
    }

    /// Adds a tag alias.
    ///
    /// Tags are normalized to lowercase before adding.
    ///
    /// Returns `true` if the alias was added, `false` if the tag was already
    /// mapped.
    pub fn add_alias(&mut self, tag: String, kind: Kind) -> bool {
        let tag = tag.to_ascii_lowercase();
        if self.tags.contains_key(&tag) {
            false
        } else {
            self.tags.insert(tag, kind);
            true
        }
    }
}
