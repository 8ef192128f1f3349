use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Splicing anchor is not part of the node list
    #[error("node with ID {0} not found")]
    NodeNotFound(String),
}
