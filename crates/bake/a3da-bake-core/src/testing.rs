//! In-memory scene used by unit tests.

use crate::data::Frame;
use crate::error::{Channel, SampleError};
use crate::scene::{AngleUnit, SceneSource};

#[derive(Clone, Debug, Default)]
pub(crate) struct MockNode {
    pub name: String,
    pub parent: Option<usize>,
    pub translate: Vec<[f64; 3]>,
    pub rotate: Vec<[f64; 3]>,
}

impl MockNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn parent(mut self, index: usize) -> Self {
        self.parent = Some(index);
        self
    }

    pub fn translate<const N: usize>(mut self, values: [[f64; 3]; N]) -> Self {
        self.translate = values.to_vec();
        self
    }

    pub fn rotate<const N: usize>(mut self, values: [[f64; 3]; N]) -> Self {
        self.rotate = values.to_vec();
        self
    }

    /// Same transform on every frame of `len`.
    pub fn still(self, len: usize) -> Self {
        Self {
            translate: vec![[0.0; 3]; len],
            rotate: vec![[0.0; 3]; len],
            ..self
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct MockScene {
    pub begin: Frame,
    pub end: Frame,
    pub unit: AngleUnit,
    pub nodes: Vec<MockNode>,
    pub playhead: Frame,
    pub playhead_history: Vec<Frame>,
}

impl MockScene {
    pub fn new(begin: Frame, end: Frame) -> Self {
        Self {
            begin,
            end,
            unit: AngleUnit::Degrees,
            nodes: Vec::new(),
            playhead: begin,
            playhead_history: Vec::new(),
        }
    }

    pub fn radians(mut self) -> Self {
        self.unit = AngleUnit::Radians;
        self
    }

    pub fn with_node(mut self, node: MockNode) -> Self {
        self.nodes.push(node);
        self
    }

    fn read(
        &self,
        node: usize,
        table: impl Fn(&MockNode) -> &Vec<[f64; 3]>,
        channel: Channel,
    ) -> Result<[f64; 3], SampleError> {
        let n = self
            .nodes
            .get(node)
            .ok_or_else(|| SampleError::new(format!("#{node}"), self.playhead, Channel::Node))?;
        let slot = (self.playhead - self.begin) as usize;
        table(n)
            .get(slot)
            .copied()
            .ok_or_else(|| SampleError::new(n.name.clone(), self.playhead, channel))
    }
}

impl SceneSource for MockScene {
    type Node = usize;

    fn frame_range(&self) -> (Frame, Frame) {
        (self.begin, self.end)
    }

    fn list_nodes(&self) -> Vec<usize> {
        (0..self.nodes.len()).collect()
    }

    fn short_name(&self, node: &usize) -> String {
        self.nodes[*node].name.clone()
    }

    fn parent_of(&self, node: &usize) -> Option<usize> {
        self.nodes[*node].parent
    }

    fn set_playhead(&mut self, frame: Frame) {
        self.playhead = frame;
        self.playhead_history.push(frame);
    }

    fn translation(&self, node: &usize) -> Result<[f64; 3], SampleError> {
        self.read(*node, |n| &n.translate, Channel::TranslateX)
    }

    fn rotation_relative(&self, node: &usize) -> Result<[f64; 3], SampleError> {
        self.read(*node, |n| &n.rotate, Channel::RotateX)
    }

    fn angle_unit(&self) -> AngleUnit {
        self.unit
    }
}
