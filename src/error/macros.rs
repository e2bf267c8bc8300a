//! Error macros for graphwalk

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a vertex the graph store does not contain
#[macro_export]
macro_rules! ensure_vertex {
    ($graph:expr, $vertex:expr) => {
        if !$crate::graph::GraphProvider::contains($graph, $vertex) {
            return Err($crate::error::GraphError::unknown_vertex($vertex));
        }
    };
}
