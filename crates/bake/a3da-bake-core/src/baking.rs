//! Baking pipeline: scene → node animations → document.
//!
//! Order of work:
//! 1. select nodes (order frozen here; it is the parent-index basis)
//! 2. sample every selected node over the frame range
//! 3. compact, build tracks, fix tangents (pure, per axis)
//! 4. link parents against the frozen order
//! 5. assemble the document

use log::{debug, info};

use crate::compact::{compact, CompactionPolicy};
use crate::config::ExportConfig;
use crate::data::{AxisTracks, FrameRange, NodeAnimation, Track};
use crate::document::{assemble_document, Document};
use crate::error::BakeError;
use crate::hierarchy::{link_scene, NodeIndex};
use crate::sampling::{sample_node, RawSamples};
use crate::scene::SceneSource;
use crate::select::select_nodes;
use crate::tangent::fix_track;
use crate::track::{build_track, sampled_vector_axes, ChannelDrive};

/// Bake the scene over its own playback range.
pub fn bake_scene<S>(scene: &mut S, cfg: &ExportConfig) -> Result<Document, BakeError>
where
    S: SceneSource + ?Sized,
{
    let (begin, end) = scene.frame_range();
    bake_scene_range(scene, FrameRange::new(begin, end)?, cfg)
}

/// Bake the scene over an explicit range.
///
/// The playhead is left on the last frame of the last sampled node.
pub fn bake_scene_range<S>(
    scene: &mut S,
    range: FrameRange,
    cfg: &ExportConfig,
) -> Result<Document, BakeError>
where
    S: SceneSource + ?Sized,
{
    let all_nodes = scene.list_nodes();
    let selection = select_nodes(&*scene, &all_nodes, &cfg.excluded_nodes);
    let index = NodeIndex::from_selection(&selection);
    debug!(
        "baking {} of {} nodes over frames {}..={}",
        selection.len(),
        all_nodes.len(),
        range.begin(),
        range.end()
    );

    let mut animations = Vec::with_capacity(selection.len());
    for selected in &selection {
        let raw = sample_node(scene, &selected.node, range)?;
        animations.push(build_node_animation(&selected.name, &raw, cfg));
    }

    let parents = link_scene(&*scene, &all_nodes, &index);
    for (anim, parent) in animations.iter_mut().zip(parents) {
        anim.parent = parent.map(|p| p as i32);
    }

    let doc = assemble_document(cfg, range, animations);
    info!(
        "baked '{}': {} nodes, frames {}..={} ({} frames)",
        doc.hierarchy_name,
        doc.nodes.len(),
        range.begin(),
        range.end(),
        doc.play_control.size
    );
    Ok(doc)
}

/// Turn one node's raw samples into its animation record. Parent is left unset.
pub fn build_node_animation(name: &str, raw: &RawSamples, cfg: &ExportConfig) -> NodeAnimation {
    let policy = cfg.compaction();
    let finish = |track: Track| {
        if cfg.emit_tangents {
            fix_track(track)
        } else {
            track
        }
    };

    let trans = AxisTracks::from_array(
        raw.translation
            .each_ref()
            .map(|axis| compact_axis(name, axis, policy)),
    )
    .map(finish);

    let rotation = compact(&raw.rotation, policy);
    if rotation.nan_dropped > 0 {
        debug!(
            "{name}: dropped {} rotation frame(s) containing NaN",
            rotation.nan_dropped
        );
    }
    let rot = sampled_vector_axes(&rotation.samples).map(finish);

    NodeAnimation {
        name: name.to_string(),
        parent: None,
        rot,
        scale: AxisTracks::splat(build_track(ChannelDrive::Constant, &[])),
        trans,
        visibility: build_track(ChannelDrive::Constant, &[]),
    }
}

fn compact_axis(
    name: &str,
    samples: &[crate::data::Sample<f64>],
    policy: CompactionPolicy,
) -> Track {
    let out = compact(samples, policy);
    if out.nan_dropped > 0 {
        debug!(
            "{name}: dropped {} translation frame(s) containing NaN",
            out.nan_dropped
        );
    }
    build_track(ChannelDrive::Sampled, &out.samples)
}
