use crate::error::{GraphError, Result};
use crate::graph::types::Edge;
use crate::graph::GraphProvider;
use std::collections::HashMap;

/// Fail with `NegativeWeight` on the first edge (in insertion order) whose
/// weight is negative or NaN.
pub fn check_non_negative<G: GraphProvider>(graph: &G) -> Result<()> {
    for vertex in graph.vertices() {
        for edge in graph.neighbors(vertex) {
            if !edge.weight.is_non_negative() {
                return Err(GraphError::negative_weight(
                    &edge.from,
                    &edge.to,
                    edge.weight.value(),
                ));
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// On the current depth-first path
    Gray,
    Black,
}

struct Frame<'a, V> {
    vertex: &'a V,
    parent: Option<&'a V>,
    edges: std::slice::Iter<'a, Edge<V>>,
}

/// Three-color depth-first search over every vertex, roots in insertion order.
///
/// `on_finish` receives vertices in post-order. Returns the first cycle found,
/// as the vertices along it with the first one repeated at the end. With
/// `skip_parent_edge` set (undirected stores), the edge straight back to the
/// DFS parent is not a cycle.
pub fn colored_dfs<'a, G, F>(
    graph: &'a G,
    skip_parent_edge: bool,
    mut on_finish: F,
) -> Option<Vec<G::Vertex>>
where
    G: GraphProvider,
    F: FnMut(&'a G::Vertex),
{
    let mut colors: HashMap<&'a G::Vertex, Color> = HashMap::with_capacity(graph.vertex_count());
    let mut path: Vec<&'a G::Vertex> = Vec::new();
    let mut stack: Vec<Frame<'a, G::Vertex>> = Vec::new();

    for root in graph.vertices() {
        if colors.contains_key(root) {
            continue;
        }
        colors.insert(root, Color::Gray);
        path.push(root);
        stack.push(Frame {
            vertex: root,
            parent: None,
            edges: graph.neighbors(root).iter(),
        });

        while let Some(frame) = stack.last_mut() {
            let Some(edge) = frame.edges.next() else {
                colors.insert(frame.vertex, Color::Black);
                on_finish(frame.vertex);
                stack.pop();
                path.pop();
                continue;
            };

            let target = &edge.to;
            match colors.get(target) {
                None => {
                    let parent = Some(frame.vertex);
                    colors.insert(target, Color::Gray);
                    path.push(target);
                    stack.push(Frame {
                        vertex: target,
                        parent,
                        edges: graph.neighbors(target).iter(),
                    });
                }
                Some(Color::Gray) => {
                    if skip_parent_edge && frame.parent == Some(target) {
                        continue;
                    }
                    let start = path.iter().position(|v| *v == target).unwrap_or(0);
                    let mut cycle: Vec<G::Vertex> =
                        path[start..].iter().map(|v| (*v).clone()).collect();
                    cycle.push(target.clone());
                    return Some(cycle);
                }
                Some(Color::Black) => {}
            }
        }
    }

    None
}
