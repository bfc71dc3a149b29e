use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while building domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("dish name must not be empty")]
    EmptyDishName,
}

pub type Result<T> = StdResult<T, CoreError>;
