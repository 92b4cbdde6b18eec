//! Document assembly and validation.

use serde::{Deserialize, Serialize};

use crate::config::{ExportConfig, CONVERTER_VERSION, FPS, PROPERTY_VERSION};
use crate::data::{AxisTracks, Frame, FrameRange, NodeAnimation, ROOT_PARENT};
use crate::track::{build_track, ChannelDrive};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Header {
    pub converter_version: String,
    pub file_name: String,
    pub property_version: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayControl {
    pub begin: Frame,
    #[serde(rename = "FPS")]
    pub fps: u32,
    pub size: u32,
}

impl PlayControl {
    pub fn for_range(range: FrameRange) -> Self {
        Self {
            begin: range.begin(),
            fps: FPS,
            size: range.size(),
        }
    }
}

/// A baked object hierarchy: the synthetic root followed by every exported node.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub header: Header,
    pub hierarchy_name: String,
    pub uid_name: String,
    pub root: NodeAnimation,
    pub nodes: Vec<NodeAnimation>,
    pub play_control: PlayControl,
}

/// The artificial node every top-level node hangs off.
pub fn synthetic_root(name: impl Into<String>) -> NodeAnimation {
    NodeAnimation {
        name: name.into(),
        parent: Some(ROOT_PARENT),
        rot: AxisTracks::splat(build_track(ChannelDrive::Undriven, &[])),
        scale: AxisTracks::splat(build_track(ChannelDrive::Constant, &[])),
        trans: AxisTracks::splat(build_track(ChannelDrive::Undriven, &[])),
        visibility: build_track(ChannelDrive::Constant, &[]),
    }
}

/// Wrap finished node animations into a document.
pub fn assemble_document(
    cfg: &ExportConfig,
    range: FrameRange,
    nodes: Vec<NodeAnimation>,
) -> Document {
    Document {
        header: Header {
            converter_version: CONVERTER_VERSION.to_string(),
            file_name: cfg.file_name.clone(),
            property_version: PROPERTY_VERSION.to_string(),
        },
        hierarchy_name: cfg.hierarchy_name.clone(),
        uid_name: cfg.uid_name(),
        root: synthetic_root(cfg.root_name()),
        nodes,
        play_control: PlayControl::for_range(range),
    }
}

impl Document {
    /// Root first, then nodes in export order. Parent indices point into this sequence.
    pub fn all_nodes(&self) -> impl Iterator<Item = &NodeAnimation> {
        std::iter::once(&self.root).chain(self.nodes.iter())
    }

    pub fn node(&self, name: &str) -> Option<&NodeAnimation> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Check structural invariants: root sentinel, parent indices in range and
    /// not self-referencing, strictly increasing key frames, non-empty range.
    pub fn validate_basic(&self) -> Result<(), String> {
        if self.play_control.size == 0 {
            return Err("PlayControl.Size must be > 0".into());
        }
        if self.root.parent != Some(ROOT_PARENT) {
            return Err(format!(
                "root node '{}' must have Parent = {ROOT_PARENT}",
                self.root.name
            ));
        }
        let count = self.nodes.len() as i32;
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(p) = node.parent {
                if p < 1 || p > count {
                    return Err(format!(
                        "node '{}' has Parent {p} outside 1..={count}",
                        node.name
                    ));
                }
                if p as usize == i + 1 {
                    return Err(format!("node '{}' is its own parent", node.name));
                }
            }
        }
        for node in self.all_nodes() {
            for track in node.tracks() {
                let keys = track.keys();
                if keys.windows(2).any(|w| w[0].frame >= w[1].frame) {
                    return Err(format!(
                        "key frames must be strictly increasing in node '{}'",
                        node.name
                    ));
                }
            }
        }
        Ok(())
    }
}
