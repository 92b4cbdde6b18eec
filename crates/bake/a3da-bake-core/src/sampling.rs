//! Per-frame transform sampling.
//!
//! Sampling is exhaustive: one value per frame per axis, in frame order.
//! Filtering happens later in [`crate::compact`].

use crate::data::{Frame, FrameRange, Sample};
use crate::error::SampleError;
use crate::scene::SceneSource;

/// Raw samples for one node over a frame range.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawSamples {
    /// Local translation, one sequence per axis.
    pub translation: [Vec<Sample<f64>>; 3],
    /// Rotation relative to the parent in radians, sampled as one vector per frame.
    pub rotation: Vec<Sample<[f64; 3]>>,
}

impl RawSamples {
    fn with_capacity(n: usize) -> Self {
        Self {
            translation: [
                Vec::with_capacity(n),
                Vec::with_capacity(n),
                Vec::with_capacity(n),
            ],
            rotation: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.rotation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotation.is_empty()
    }

    /// Frames covered, in order.
    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.rotation.iter().map(|s| s.frame)
    }

    /// Rotation split into per-axis sequences.
    pub fn rotation_axes(&self) -> [Vec<Sample<f64>>; 3] {
        let axis = |i: usize| {
            self.rotation
                .iter()
                .map(|s| Sample::new(s.frame, s.value[i]))
                .collect()
        };
        [axis(0), axis(1), axis(2)]
    }
}

/// Sample translation and rotation of `node` at every frame in `range`.
///
/// Moves the scene playhead once per frame. Fails on the first channel the
/// scene cannot resolve; nothing sampled for the node so far is returned.
pub fn sample_node<S>(
    scene: &mut S,
    node: &S::Node,
    range: FrameRange,
) -> Result<RawSamples, SampleError>
where
    S: SceneSource + ?Sized,
{
    let unit = scene.angle_unit();
    let mut out = RawSamples::with_capacity(range.size() as usize);

    for frame in range.iter() {
        scene.set_playhead(frame);

        let t = scene.translation(node)?;
        for (axis, value) in out.translation.iter_mut().zip(t) {
            axis.push(Sample::new(frame, value));
        }

        let r = scene.rotation_relative(node)?;
        out.rotation
            .push(Sample::new(frame, r.map(|angle| unit.to_radians(angle))));
    }

    Ok(out)
}
