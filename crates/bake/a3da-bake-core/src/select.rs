//! Node selection: resolve short names and drop excluded nodes.

use hashbrown::HashSet;

use crate::scene::SceneSource;

/// A node chosen for export together with its resolved short name.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedNode<N> {
    pub node: N,
    pub name: String,
}

/// Keep every node whose short name is not excluded, in the order given.
///
/// The returned order is the node order of the document; parent indices are
/// computed against it.
pub fn select_nodes<S, I>(scene: &S, nodes: &[S::Node], excluded: I) -> Vec<SelectedNode<S::Node>>
where
    S: SceneSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let excluded: HashSet<String> = excluded
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();

    nodes
        .iter()
        .filter_map(|node| {
            let name = scene.short_name(node);
            if excluded.contains(&name) {
                None
            } else {
                Some(SelectedNode {
                    node: node.clone(),
                    name,
                })
            }
        })
        .collect()
}
