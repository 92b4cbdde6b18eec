//! Shared scene fixtures for a3da-bake tests.
//!
//! Scenes are JSON recordings of a host scene: a playback range, and per node a
//! long DAG path plus one translate/rotate row per frame. `null` components read
//! as NaN; a node with fewer rows than frames fails to sample past its last row.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use a3da_bake_core::{AngleUnit, Channel, Frame, SampleError, SceneSource};
use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    scenes: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod scenes {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.scenes.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.scenes, "scene", name)?;
        read_to_string(rel)
    }

    pub fn load(name: &str) -> Result<RecordedScene> {
        let text = json(name)?;
        RecordedScene::from_json(&text).with_context(|| format!("failed to parse scene fixture {name}"))
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.scenes, "scene", name)?;
        Ok(resolve_path(rel))
    }
}

type Row = [Option<f64>; 3];

#[derive(Clone, Debug, Deserialize)]
struct RecordedNode {
    /// Long DAG path, `|Parent|Child`.
    path: String,
    /// Explicit parent path; defaults to the path's prefix.
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    translate: Vec<Row>,
    #[serde(default)]
    rotate: Vec<Row>,
}

impl RecordedNode {
    fn short_name(&self) -> &str {
        self.path.rsplit('|').next().unwrap_or(&self.path)
    }

    fn parent_path(&self) -> Option<&str> {
        if let Some(p) = &self.parent {
            return Some(p.as_str());
        }
        let cut = self.path.rfind('|')?;
        (cut > 0).then(|| &self.path[..cut])
    }
}

/// A recorded scene with a movable playhead.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedScene {
    frame_range: (Frame, Frame),
    #[serde(default)]
    angle_unit: AngleUnit,
    nodes: Vec<RecordedNode>,
    #[serde(skip)]
    playhead: Frame,
    /// Every frame the playhead was moved to, in order.
    #[serde(skip)]
    pub playhead_history: Vec<Frame>,
}

impl RecordedScene {
    pub fn from_json(s: &str) -> Result<Self> {
        let mut scene: RecordedScene = serde_json::from_str(s)?;
        scene.playhead = scene.frame_range.0;
        Ok(scene)
    }

    pub fn playhead(&self) -> Frame {
        self.playhead
    }

    /// Long paths of every node, in listing order.
    pub fn paths(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.path.as_str()).collect()
    }

    fn read(&self, node: usize, rotate: bool) -> Result<[f64; 3], SampleError> {
        let n = self
            .nodes
            .get(node)
            .ok_or_else(|| SampleError::new(format!("#{node}"), self.playhead, Channel::Node))?;
        let (rows, channel) = if rotate {
            (&n.rotate, Channel::RotateX)
        } else {
            (&n.translate, Channel::TranslateX)
        };
        let slot = usize::try_from(self.playhead - self.frame_range.0).ok();
        let row = slot
            .and_then(|i| rows.get(i))
            .ok_or_else(|| SampleError::new(n.short_name(), self.playhead, channel))?;
        Ok((*row).map(|v| v.unwrap_or(f64::NAN)))
    }
}

impl SceneSource for RecordedScene {
    type Node = usize;

    fn frame_range(&self) -> (Frame, Frame) {
        self.frame_range
    }

    fn list_nodes(&self) -> Vec<usize> {
        (0..self.nodes.len()).collect()
    }

    fn short_name(&self, node: &usize) -> String {
        self.nodes
            .get(*node)
            .map(|n| n.short_name().to_string())
            .unwrap_or_default()
    }

    fn parent_of(&self, node: &usize) -> Option<usize> {
        let parent = self.nodes.get(*node)?.parent_path()?;
        self.nodes.iter().position(|n| n.path == parent)
    }

    fn set_playhead(&mut self, frame: Frame) {
        self.playhead = frame;
        self.playhead_history.push(frame);
    }

    fn translation(&self, node: &usize) -> Result<[f64; 3], SampleError> {
        self.read(*node, false)
    }

    fn rotation_relative(&self, node: &usize) -> Result<[f64; 3], SampleError> {
        self.read(*node, true)
    }

    fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }
}
