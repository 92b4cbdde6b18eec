//! Parent/child linking over the exported node list.
//!
//! Links are resolved by short name against a [`NodeIndex`] built once the
//! selection order is final. Parent indices are 1-based positions in the
//! document's node list (position 0 is the synthetic root).

use hashbrown::HashMap;
use log::warn;

use crate::scene::SceneSource;
use crate::select::SelectedNode;

/// Short name → 1-based position in the exported node list.
#[derive(Clone, Debug, Default)]
pub struct NodeIndex {
    slots: HashMap<String, u32>,
    len: usize,
}

impl NodeIndex {
    /// Build from names in export order. A repeated name maps to its last position.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut slots = HashMap::new();
        let mut len = 0;
        for name in names {
            len += 1;
            slots.insert(name.into(), len as u32);
        }
        Self { slots, len }
    }

    pub fn from_selection<N>(selection: &[SelectedNode<N>]) -> Self {
        Self::from_names(selection.iter().map(|s| s.name.as_str()))
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.slots.get(name).copied()
    }

    /// Number of exported nodes the index was built over.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Resolve parent links from `(child, parent)` short-name pairs.
///
/// Returns one entry per exported node, in export order. Children or parents
/// that were not exported are skipped, leaving the child parented to the root.
pub fn resolve_links<'a, I>(pairs: I, index: &NodeIndex) -> Vec<Option<u32>>
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut parents = vec![None; index.len()];
    for (child, parent) in pairs {
        let Some(parent) = parent else { continue };
        let (Some(child_slot), Some(parent_slot)) = (index.get(child), index.get(parent)) else {
            continue;
        };
        parents[child_slot as usize - 1] = Some(parent_slot);
    }
    parents
}

/// Link every node the scene lists (excluded ones included) against `index`.
pub fn link_scene<S>(scene: &S, nodes: &[S::Node], index: &NodeIndex) -> Vec<Option<u32>>
where
    S: SceneSource + ?Sized,
{
    let named: Vec<(String, Option<String>)> = nodes
        .iter()
        .map(|node| {
            let parent = scene.parent_of(node).map(|p| scene.short_name(&p));
            (scene.short_name(node), parent)
        })
        .collect();

    let mut parents = resolve_links(
        named.iter().map(|(c, p)| (c.as_str(), p.as_deref())),
        index,
    );
    let removed = break_cycles(&mut parents);
    for slot in removed {
        warn!("parent link of node #{slot} closes a cycle; parenting it to the root");
    }
    parents
}

/// Remove links that make a node its own ancestor. Returns the 1-based
/// positions whose links were removed. An acyclic input is left unchanged.
pub fn break_cycles(parents: &mut [Option<u32>]) -> Vec<u32> {
    let n = parents.len();
    let mut removed = Vec::new();
    for i in 0..n {
        let me = i as u32 + 1;
        let mut cur = parents[i];
        let mut steps = 0;
        while let Some(p) = cur {
            if p == me {
                parents[i] = None;
                removed.push(me);
                break;
            }
            steps += 1;
            if steps > n {
                // Cycle further up that does not include this node.
                break;
            }
            cur = parents.get(p as usize - 1).copied().flatten();
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockNode, MockScene};

    #[test]
    fn links_resolve_to_one_based_positions() {
        let index = NodeIndex::from_names(["Shoulder", "Arm", "Hand"]);
        let parents = resolve_links(
            [
                ("Shoulder", None),
                ("Arm", Some("Shoulder")),
                ("Hand", Some("Arm")),
            ],
            &index,
        );
        assert_eq!(parents, vec![None, Some(1), Some(2)]);
    }

    #[test]
    fn excluded_parent_leaves_child_at_root() {
        let index = NodeIndex::from_names(["Arm"]);
        let parents = resolve_links([("Shoulder", None), ("Arm", Some("Shoulder"))], &index);
        assert_eq!(parents, vec![None]);
    }

    #[test]
    fn links_from_excluded_children_are_ignored() {
        let index = NodeIndex::from_names(["Root"]);
        let parents = resolve_links([("persp", Some("Root"))], &index);
        assert_eq!(parents, vec![None]);
    }

    #[test]
    fn scene_linking_walks_unfiltered_nodes() {
        let scene = MockScene::new(1, 1)
            .with_node(MockNode::new("Shoulder"))
            .with_node(MockNode::new("Arm").parent(0))
            .with_node(MockNode::new("Hand").parent(1));
        let index = NodeIndex::from_names(["Arm", "Hand"]);
        let parents = link_scene(&scene, &scene.list_nodes(), &index);
        assert_eq!(parents, vec![None, Some(1)]);
    }

    #[test]
    fn cycles_are_broken_and_forests_kept() {
        let mut forest = vec![None, Some(1), Some(2), Some(1)];
        assert!(break_cycles(&mut forest).is_empty());
        assert_eq!(forest, vec![None, Some(1), Some(2), Some(1)]);

        let mut cyclic = vec![Some(2), Some(1), Some(2)];
        assert_eq!(break_cycles(&mut cyclic), vec![1]);
        assert_eq!(cyclic, vec![None, Some(1), Some(2)]);

        let mut own_parent = vec![Some(1)];
        assert_eq!(break_cycles(&mut own_parent), vec![1]);
        assert_eq!(own_parent, vec![None]);
    }
}
