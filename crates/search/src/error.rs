use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    #[error("depth limit must be at least 1")]
    ZeroDepth,
}

pub type Result<T> = std::result::Result<T, SearchError>;
