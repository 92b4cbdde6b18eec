//! Export configuration consumed by the baking pipeline.

use serde::{Deserialize, Serialize};

use crate::compact::CompactionPolicy;

/// Playback rate written into every document's play control.
pub const FPS: u32 = 60;
/// Opaque version tokens carried into the document header.
pub const CONVERTER_VERSION: &str = "20050823";
pub const PROPERTY_VERSION: &str = "20050706";

/// Host nodes that are never exported (default cameras and their shapes).
pub const DEFAULT_EXCLUDED_NODES: [&str; 8] = [
    "persp",
    "perspShape",
    "top",
    "front",
    "side",
    "topShape",
    "frontShape",
    "sideShape",
];

/// Options for one export. Every field has a default, so a partial JSON object
/// deserializes into a usable config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    /// Drop samples equal to the last kept sample.
    pub dedup: bool,
    /// Drop frames whose sample contains a NaN.
    pub nan_filter: bool,
    /// Run the tangent continuity pass over interpolated tracks.
    pub emit_tangents: bool,
    /// Name of the exported object hierarchy.
    pub hierarchy_name: String,
    /// Appended to `hierarchy_name` to form the hierarchy's UID name.
    pub uid_suffix: String,
    /// Prepended to `hierarchy_name` to name the synthetic root node.
    pub root_prefix: String,
    /// Written into the header's `FileName` field.
    pub file_name: String,
    /// Short names skipped by node selection.
    pub excluded_nodes: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dedup: true,
            nan_filter: true,
            emit_tangents: true,
            hierarchy_name: "EFFCHRPV739MIK001_MOB".to_string(),
            uid_suffix: "__DIVSKN".to_string(),
            root_prefix: "OBJHRC_".to_string(),
            file_name: String::new(),
            excluded_nodes: DEFAULT_EXCLUDED_NODES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExportConfig {
    /// Uncompacted export: every sampled frame becomes a key, NaNs included.
    pub fn raw() -> Self {
        Self {
            dedup: false,
            nan_filter: false,
            ..Self::default()
        }
    }

    pub fn with_dedup(mut self, enabled: bool) -> Self {
        self.dedup = enabled;
        self
    }

    pub fn with_nan_filter(mut self, enabled: bool) -> Self {
        self.nan_filter = enabled;
        self
    }

    pub fn with_tangents(mut self, enabled: bool) -> Self {
        self.emit_tangents = enabled;
        self
    }

    pub fn with_hierarchy_name(mut self, name: impl Into<String>) -> Self {
        self.hierarchy_name = name.into();
        self
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Replace the exclusion set.
    pub fn with_excluded_nodes<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.excluded_nodes = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn compaction(&self) -> CompactionPolicy {
        CompactionPolicy {
            dedup: self.dedup,
            nan_filter: self.nan_filter,
        }
    }

    pub fn uid_name(&self) -> String {
        format!("{}{}", self.hierarchy_name, self.uid_suffix)
    }

    pub fn root_name(&self) -> String {
        format!("{}{}", self.root_prefix, self.hierarchy_name)
    }
}
