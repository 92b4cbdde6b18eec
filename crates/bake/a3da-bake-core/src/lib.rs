//! A3DA bake core (host-agnostic)
//!
//! Bakes per-frame transforms read from a [`SceneSource`] into a compact
//! hierarchical keyframe document and renders it as A3DA-style JSON.
//!
//! Pipeline: node selection → transform sampling → redundancy compaction →
//! track building → tangent continuity → parent linking → document assembly →
//! serialization. Everything after sampling is pure.

pub mod baking;
pub mod compact;
pub mod config;
pub mod data;
pub mod document;
pub mod error;
pub mod export;
pub mod hierarchy;
pub mod sampling;
pub mod scene;
pub mod select;
pub mod tangent;
pub mod track;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for hosts
pub use baking::{bake_scene, bake_scene_range, build_node_animation};
pub use compact::{compact, CompactionPolicy};
pub use config::{ExportConfig, FPS};
pub use data::{AxisTracks, Frame, FrameRange, Key, NodeAnimation, Sample, Track, ROOT_PARENT};
pub use document::{Document, Header, PlayControl};
pub use error::{BakeError, Channel, SampleError};
pub use export::{export_to_path, parse_document_json, to_json_string, to_json_value, write_document};
pub use hierarchy::NodeIndex;
pub use sampling::{sample_node, RawSamples};
pub use scene::{AngleUnit, SceneSource};
pub use select::{select_nodes, SelectedNode};
