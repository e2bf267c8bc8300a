use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Identity of a vertex. Any hashable, cloneable value qualifies
/// (integers, strings, coordinate tuples).
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// Weight of a single edge, or an accumulated path distance.
/// Unweighted edges carry [`Weight::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const DEFAULT: Weight = Weight(1.0);
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// True for zero or positive weights; false for negatives and NaN
    pub fn is_non_negative(&self) -> bool {
        self.0 >= 0.0
    }

    /// Total ordering, usable for heap keys and sorting
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl From<u32> for Weight {
    fn from(weight: u32) -> Self {
        Weight(weight as f64)
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: Weight,
}

impl<V: Vertex> Edge<V> {
    pub fn new(from: V, to: V, weight: Weight) -> Self {
        Edge { from, to, weight }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Implements `as_str`, `Display` and `FromStr` for a fieldless enum
/// from a table of accepted spellings.
macro_rules! named_enum {
    ($ty:ident, $context:expr, { $($variant:ident => $name:literal $(, $alias:literal)*;)+ }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = GraphError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($name $(| $alias)* => Ok($ty::$variant),)+
                    other => Err(GraphError::invalid_value($context, other)),
                }
            }
        }
    };
}

/// Which adjacency the traversal engine follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Outgoing edges only
    #[default]
    Out,
    /// Incoming edges only (walk the graph backwards)
    In,
    /// Both, i.e. the undirected closure of the graph
    Both,
}

named_enum!(Direction, "direction", {
    Out => "out";
    In => "in";
    Both => "both";
});

/// Frontier discipline for the traversal engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    /// Last-in-first-out frontier
    DepthFirst,
    /// First-in-first-out frontier
    #[default]
    BreadthFirst,
}

named_enum!(TraversalOrder, "traversal order", {
    DepthFirst => "depth-first", "dfs";
    BreadthFirst => "breadth-first", "bfs";
});

/// How depth-first traversal is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DfsStrategy {
    /// Explicit stack; safe on arbitrarily deep graphs
    #[default]
    Iterative,
    /// Call-stack recursion, bounded by `max_recursion_depth`
    Recursive,
}

named_enum!(DfsStrategy, "depth-first strategy", {
    Iterative => "iterative";
    Recursive => "recursive";
});

/// Topological sort algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopoMethod {
    /// Repeatedly remove zero in-degree vertices
    #[default]
    Kahn,
    /// Reverse post-order of a colored depth-first search
    DepthFirst,
}

named_enum!(TopoMethod, "topological sort method", {
    Kahn => "kahn";
    DepthFirst => "depth-first", "dfs";
});

/// Minimum spanning tree algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MstMethod {
    /// Sort edges, join components with a disjoint set
    #[default]
    Kruskal,
    /// Grow each tree from a root over a priority frontier of crossing edges
    Prim,
}

named_enum!(MstMethod, "spanning tree method", {
    Kruskal => "kruskal";
    Prim => "prim";
});

/// Visitor verdict after seeing a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    #[default]
    Continue,
    /// Halt the traversal; the visited set stays consistent
    Stop,
}

impl From<()> for Visit {
    fn from(_: ()) -> Self {
        Visit::Continue
    }
}

impl From<bool> for Visit {
    /// `true` means keep going
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Visit::Continue
        } else {
            Visit::Stop
        }
    }
}

/// Options for a single traversal call
#[derive(Debug, Clone)]
pub struct TraversalOptions {
    /// Frontier discipline
    pub order: TraversalOrder,
    /// Adjacency to follow
    pub direction: Direction,
    /// Depth-first execution strategy (ignored for breadth-first)
    pub strategy: DfsStrategy,
    /// Bound on recursion depth for the recursive strategy
    pub max_recursion_depth: usize,
}

/// Default bound for recursive depth-first traversal. A walk this deep fits
/// the 2 MiB stack of a spawned thread; raise it only on a larger stack.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 1000;

impl Default for TraversalOptions {
    fn default() -> Self {
        TraversalOptions {
            order: TraversalOrder::default(),
            direction: Direction::default(),
            strategy: DfsStrategy::default(),
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}

impl TraversalOptions {
    pub fn depth_first() -> Self {
        TraversalOptions {
            order: TraversalOrder::DepthFirst,
            ..Default::default()
        }
    }

    pub fn breadth_first() -> Self {
        TraversalOptions {
            order: TraversalOrder::BreadthFirst,
            ..Default::default()
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_default() {
        let weight = Weight::default();
        assert_eq!(weight.value(), 1.0);
    }

    #[test]
    fn test_weight_addition() {
        let sum = Weight::from(2) + Weight::new(0.5);
        assert_eq!(sum.value(), 2.5);
    }

    #[test]
    fn test_weight_sum() {
        let total: Weight = [1.0, 2.0, 3.5].into_iter().map(Weight::new).sum();
        assert_eq!(total.value(), 6.5);
    }

    #[test]
    fn test_weight_non_negative() {
        assert!(Weight::ZERO.is_non_negative());
        assert!(Weight::new(3.0).is_non_negative());
        assert!(!Weight::new(-0.1).is_non_negative());
        assert!(!Weight::new(f64::NAN).is_non_negative());
    }

    #[test]
    fn test_weight_infinity_orders_last() {
        assert_eq!(
            Weight::new(1e300).total_cmp(&Weight::INFINITY),
            std::cmp::Ordering::Less
        );
        assert!(!Weight::INFINITY.is_finite());
    }

    #[test]
    fn test_traversal_order_parse() {
        assert_eq!(
            "dfs".parse::<TraversalOrder>().unwrap(),
            TraversalOrder::DepthFirst
        );
        assert_eq!(
            "Breadth-First".parse::<TraversalOrder>().unwrap(),
            TraversalOrder::BreadthFirst
        );
        assert!("sideways".parse::<TraversalOrder>().is_err());
    }

    #[test]
    fn test_direction_parse_and_display() {
        assert_eq!("both".parse::<Direction>().unwrap(), Direction::Both);
        assert_eq!(Direction::In.to_string(), "in");
        let err = "up".parse::<Direction>().unwrap_err();
        assert_eq!(err.to_string(), "invalid direction: up");
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("dfs".parse::<TopoMethod>().unwrap(), TopoMethod::DepthFirst);
        assert_eq!("prim".parse::<MstMethod>().unwrap(), MstMethod::Prim);
        assert_eq!(MstMethod::default(), MstMethod::Kruskal);
    }

    #[test]
    fn test_visit_conversions() {
        assert_eq!(Visit::from(()), Visit::Continue);
        assert_eq!(Visit::from(false), Visit::Stop);
    }

    #[test]
    fn test_traversal_options_default() {
        let opts = TraversalOptions::default();
        assert_eq!(opts.order, TraversalOrder::BreadthFirst);
        assert_eq!(opts.direction, Direction::Out);
        assert_eq!(opts.strategy, DfsStrategy::Iterative);
        assert_eq!(opts.max_recursion_depth, DEFAULT_MAX_RECURSION_DEPTH);
    }
}
