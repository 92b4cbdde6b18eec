//! Keyframe document data model: samples, keys, tracks and node animations.

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::BakeError;

/// Integer frame number on the scene timeline.
pub type Frame = i32;

/// `Parent` value carried by the synthetic root.
pub const ROOT_PARENT: i32 = -1;

/// Closed, non-empty frame interval `[begin, end]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FrameRange {
    begin: Frame,
    end: Frame,
}

impl FrameRange {
    pub fn new(begin: Frame, end: Frame) -> Result<Self, BakeError> {
        if end < begin {
            return Err(BakeError::EmptyFrameRange { begin, end });
        }
        Ok(Self { begin, end })
    }

    pub fn begin(&self) -> Frame {
        self.begin
    }

    pub fn end(&self) -> Frame {
        self.end
    }

    /// Number of frames, `end - begin + 1`.
    pub fn size(&self) -> u32 {
        (i64::from(self.end) - i64::from(self.begin) + 1) as u32
    }

    /// Every frame in ascending order.
    pub fn iter(&self) -> std::ops::RangeInclusive<Frame> {
        self.begin..=self.end
    }
}

/// One sampled value at a frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample<T> {
    pub frame: Frame,
    pub value: T,
}

impl<T> Sample<T> {
    pub fn new(frame: Frame, value: T) -> Self {
        Self { frame, value }
    }
}

/// A key on an interpolated track.
///
/// Serialized as `[frame, value]`, `[frame, value, tangent]` when only the
/// outgoing tangent is set, or `[frame, value, tangentIn, tangentOut]`.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawKey")]
pub struct Key {
    pub frame: Frame,
    pub value: f64,
    pub tangent_in: Option<f64>,
    pub tangent_out: Option<f64>,
}

impl Key {
    pub fn new(frame: Frame, value: f64) -> Self {
        Self {
            frame,
            value,
            tangent_in: None,
            tangent_out: None,
        }
    }

    pub fn with_tangent_out(mut self, tangent: f64) -> Self {
        self.tangent_out = Some(tangent);
        self
    }
}

impl From<Sample<f64>> for Key {
    fn from(s: Sample<f64>) -> Self {
        Key::new(s.frame, s.value)
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = match (self.tangent_in, self.tangent_out) {
            (None, None) => 2,
            (None, Some(_)) => 3,
            (Some(_), _) => 4,
        };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.frame)?;
        seq.serialize_element(&self.value)?;
        match (self.tangent_in, self.tangent_out) {
            (None, None) => {}
            (None, Some(out)) => seq.serialize_element(&out)?,
            (Some(tin), out) => {
                seq.serialize_element(&tin)?;
                seq.serialize_element(&out.unwrap_or(tin))?;
            }
        }
        seq.end()
    }
}

// Non-finite values are written as `null`; read them back as NaN.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    InOut(Frame, Option<f64>, Option<f64>, Option<f64>),
    Out(Frame, Option<f64>, Option<f64>),
    Plain(Frame, Option<f64>),
}

impl From<RawKey> for Key {
    fn from(raw: RawKey) -> Self {
        let v = |x: Option<f64>| x.unwrap_or(f64::NAN);
        match raw {
            RawKey::Plain(frame, value) => Key::new(frame, v(value)),
            RawKey::Out(frame, value, out) => Key {
                frame,
                value: v(value),
                tangent_in: None,
                tangent_out: Some(v(out)),
            },
            RawKey::InOut(frame, value, tin, out) => Key {
                frame,
                value: v(value),
                tangent_in: Some(v(tin)),
                tangent_out: Some(v(out)),
            },
        }
    }
}

/// One channel's value over time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Type")]
pub enum Track {
    /// Channel is not driven.
    None,
    /// Channel holds one value for the whole clip.
    Static {
        #[serde(rename = "Value")]
        value: f64,
    },
    /// Channel is interpolated between keys.
    Linear {
        #[serde(rename = "Keys")]
        keys: Vec<Key>,
    },
}

impl Track {
    /// `Static(1)`: identity scale, full visibility.
    pub fn identity() -> Self {
        Track::Static { value: 1.0 }
    }

    pub fn keys(&self) -> &[Key] {
        match self {
            Track::Linear { keys } => keys,
            _ => &[],
        }
    }
}

/// X/Y/Z tracks of one transform component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisTracks {
    #[serde(rename = "X")]
    pub x: Track,
    #[serde(rename = "Y")]
    pub y: Track,
    #[serde(rename = "Z")]
    pub z: Track,
}

impl AxisTracks {
    pub fn splat(track: Track) -> Self {
        Self {
            x: track.clone(),
            y: track.clone(),
            z: track,
        }
    }

    pub fn from_array([x, y, z]: [Track; 3]) -> Self {
        Self { x, y, z }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        [&self.x, &self.y, &self.z].into_iter()
    }

    pub fn map(self, mut f: impl FnMut(Track) -> Track) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
}

/// Animation of a single node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeAnimation {
    #[serde(rename = "Name")]
    pub name: String,
    /// 1-based position in the document's node list, or [`ROOT_PARENT`] for the
    /// synthetic root. Absent for nodes parented to the root.
    #[serde(rename = "Parent", default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<i32>,
    #[serde(rename = "Rot")]
    pub rot: AxisTracks,
    #[serde(rename = "Scale")]
    pub scale: AxisTracks,
    #[serde(rename = "Trans")]
    pub trans: AxisTracks,
    #[serde(rename = "Visibility")]
    pub visibility: Track,
}

impl NodeAnimation {
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.rot
            .iter()
            .chain(self.scale.iter())
            .chain(self.trans.iter())
            .chain(std::iter::once(&self.visibility))
    }
}
