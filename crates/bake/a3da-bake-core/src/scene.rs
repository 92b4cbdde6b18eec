//! Scene source seam.
//!
//! The authoring tool's scene graph is not part of this crate. Hosts (or test
//! fixtures) implement [`SceneSource`] and hand it to the baking entry points.
//! Per-frame queries are only valid for the frame last passed to
//! [`SceneSource::set_playhead`]; the sampler holds `&mut` access for a whole
//! pass so nothing else can move the playhead underneath it.

use serde::{Deserialize, Serialize};

use crate::data::Frame;
use crate::error::SampleError;

/// Angular unit the scene reports rotations in.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    #[inline]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle.to_radians(),
            AngleUnit::Radians => angle,
        }
    }
}

/// Read access to a host scene plus control of its shared playhead.
pub trait SceneSource {
    /// Opaque node reference (long path, DAG handle, index, ...).
    type Node: Clone;

    /// Playback range as `(begin, end)`, both inclusive.
    fn frame_range(&self) -> (Frame, Frame);

    /// Every node in the scene, in the host's enumeration order.
    fn list_nodes(&self) -> Vec<Self::Node>;

    /// Unqualified display name of a node.
    fn short_name(&self, node: &Self::Node) -> String;

    /// Direct parent, if any.
    fn parent_of(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Move the playhead. Invalidates previously read values.
    fn set_playhead(&mut self, frame: Frame);

    /// Local translation at the current playhead.
    fn translation(&self, node: &Self::Node) -> Result<[f64; 3], SampleError>;

    /// Euler rotation relative to the parent at the current playhead, in
    /// [`SceneSource::angle_unit`] units.
    fn rotation_relative(&self, node: &Self::Node) -> Result<[f64; 3], SampleError>;

    fn angle_unit(&self) -> AngleUnit {
        AngleUnit::Degrees
    }
}
