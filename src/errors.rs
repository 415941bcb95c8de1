use thiserror::Error;


/// Errors raised while building a graph
/// Solving never fails: unreachable vertices surface as empty routes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Edge endpoint was not created by this graph
    #[error("vertex {index} does not belong to this graph ({vertex_count} vertices)")]
    UnknownVertex { index: usize, vertex_count: usize },

    /// Weight is negative or not comparable to zero (NaN)
    #[error("edge {from} -> {to} has a negative or non-comparable weight")]
    InvalidWeight { from: usize, to: usize },
}
