//! Request bodies (Deserialize) and their validated variants.
//!
//! Bodies arrive as loose JSON objects and are turned into a tagged variant
//! exactly once, at the handler boundary.

use serde::Deserialize;

use crate::api_error::ApiError;

pub const MISSING_ADD_TARGET: &str = "provide a dish name (`name`) or a list of dishes (`dishes`)";
pub const MISSING_REMOVE_TARGET: &str =
    "provide the dish name to delete (`name`) or set `clearAll` to true";

#[derive(Debug, Default, Deserialize)]
pub struct AddDishesBody {
    pub name: Option<String>,
    pub dishes: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoveDishesBody {
    pub name: Option<String>,
    #[serde(rename = "clearAll", default)]
    pub clear_all: bool,
}

/// `POST /api/dishes` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddDishes {
    Single(String),
    Batch(Vec<String>),
}

/// `DELETE /api/dishes` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveDishes {
    Single(String),
    ClearAll,
}

impl TryFrom<AddDishesBody> for AddDishes {
    type Error = ApiError;

    fn try_from(body: AddDishesBody) -> Result<Self, Self::Error> {
        match body {
            AddDishesBody { dishes: Some(dishes), .. } => Ok(Self::Batch(dishes)),
            AddDishesBody { name: Some(name), .. } if !name.is_empty() => Ok(Self::Single(name)),
            _ => Err(ApiError::BadRequest(MISSING_ADD_TARGET.to_owned())),
        }
    }
}

impl TryFrom<RemoveDishesBody> for RemoveDishes {
    type Error = ApiError;

    fn try_from(body: RemoveDishesBody) -> Result<Self, Self::Error> {
        match body {
            RemoveDishesBody { clear_all: true, .. } => Ok(Self::ClearAll),
            RemoveDishesBody { name: Some(name), .. } if !name.is_empty() => {
                Ok(Self::Single(name))
            },
            _ => Err(ApiError::BadRequest(MISSING_REMOVE_TARGET.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code")]
mod tests {
    use super::*;

    fn add(json: &str) -> Result<AddDishes, ApiError> {
        AddDishes::try_from(serde_json::from_str::<AddDishesBody>(json).unwrap())
    }

    fn remove(json: &str) -> Result<RemoveDishes, ApiError> {
        RemoveDishes::try_from(serde_json::from_str::<RemoveDishesBody>(json).unwrap())
    }

    #[test]
    fn add_variants() {
        assert_eq!(add(r#"{"name":"鱼香肉丝"}"#).unwrap(), AddDishes::Single("鱼香肉丝".to_owned()));
        assert_eq!(
            add(r#"{"dishes":["a","b"]}"#).unwrap(),
            AddDishes::Batch(vec!["a".to_owned(), "b".to_owned()])
        );
    }

    #[test]
    fn batch_wins_over_name() {
        assert!(matches!(add(r#"{"name":"x","dishes":[]}"#).unwrap(), AddDishes::Batch(v) if v.is_empty()));
    }

    #[test]
    fn add_without_target_is_bad_request() {
        assert!(matches!(add("{}"), Err(ApiError::BadRequest(_))));
        assert!(matches!(add(r#"{"name":""}"#), Err(ApiError::BadRequest(_))));
        assert!(matches!(add(r#"{"other":1}"#), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn remove_variants() {
        assert_eq!(remove(r#"{"clearAll":true}"#).unwrap(), RemoveDishes::ClearAll);
        assert_eq!(
            remove(r#"{"name":"回锅肉","clearAll":false}"#).unwrap(),
            RemoveDishes::Single("回锅肉".to_owned())
        );
        assert!(matches!(remove(r#"{"clearAll":false}"#), Err(ApiError::BadRequest(_))));
    }
}
