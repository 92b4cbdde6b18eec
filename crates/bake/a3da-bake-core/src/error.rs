//! Error types for the baking pipeline.

use std::fmt;

use thiserror::Error;

use crate::data::Frame;

/// A transform attribute queried from the scene at the current playhead.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Channel {
    /// The node itself could not be resolved.
    Node,
    TranslateX,
    TranslateY,
    TranslateZ,
    RotateX,
    RotateY,
    RotateZ,
}

impl Channel {
    /// Host attribute name, e.g. `translateX`.
    pub fn attribute(self) -> &'static str {
        match self {
            Channel::Node => "node",
            Channel::TranslateX => "translateX",
            Channel::TranslateY => "translateY",
            Channel::TranslateZ => "translateZ",
            Channel::RotateX => "rotateX",
            Channel::RotateY => "rotateY",
            Channel::RotateZ => "rotateZ",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

/// A node or channel could not be resolved by the scene at a given frame.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("cannot sample {node}.{channel} at frame {frame}")]
pub struct SampleError {
    pub node: String,
    pub frame: Frame,
    pub channel: Channel,
}

impl SampleError {
    pub fn new(node: impl Into<String>, frame: Frame, channel: Channel) -> Self {
        Self {
            node: node.into(),
            frame,
            channel,
        }
    }
}

/// Fatal errors surfaced by an export. No partial document is produced when any of these occur.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BakeError {
    #[error("empty frame range: end {end} is before begin {begin}")]
    EmptyFrameRange { begin: Frame, end: Frame },

    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error("serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("write document: {0}")]
    Io(#[from] std::io::Error),

    #[error("document parse error: {0}")]
    Parse(String),
}
