//! Keyframe track construction.

use crate::data::{AxisTracks, Key, Sample, Track};

/// How a channel is produced.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChannelDrive {
    /// Keys come from sampled values.
    Sampled,
    /// Fixed at 1 regardless of the scene (scale, visibility).
    Constant,
    /// Never animated (the synthetic root's transform).
    Undriven,
}

/// Build the track for one channel.
///
/// An empty sampled channel still yields an empty `Linear` track so the
/// document keeps its shape.
pub fn build_track(drive: ChannelDrive, samples: &[Sample<f64>]) -> Track {
    match drive {
        ChannelDrive::Undriven => Track::None,
        ChannelDrive::Constant => Track::identity(),
        ChannelDrive::Sampled => Track::Linear {
            keys: samples.iter().copied().map(Key::from).collect(),
        },
    }
}

/// Linear X/Y/Z tracks from vector samples. Every axis gets a key on each
/// surviving frame.
pub fn sampled_vector_axes(samples: &[Sample<[f64; 3]>]) -> AxisTracks {
    let axis = |i: usize| Track::Linear {
        keys: samples
            .iter()
            .map(|s| Key::new(s.frame, s.value[i]))
            .collect(),
    };
    AxisTracks {
        x: axis(0),
        y: axis(1),
        z: axis(2),
    }
}
