use thiserror::Error;

use crate::graph::GraphError;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("route graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("no usable route between the requested endpoints")]
    NoRoute,
}
