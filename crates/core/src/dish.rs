use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A persisted menu item.
///
/// Rows are only ever created or deleted; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-types", derive(sqlx::FromRow))]
pub struct Dish {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Trimmed, non-empty dish name.
///
/// Every store operation keyed by name takes this type, so `"  X  "` and
/// `"X"` always address the same row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DishName(String);

impl DishName {
    /// Trims `raw` and rejects the empty result.
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyDishName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DishName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DishName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<DishName> for String {
    fn from(name: DishName) -> Self {
        name.0
    }
}

impl AsRef<str> for DishName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DishName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let name = DishName::new("  宫保鸡丁  ").unwrap();
        assert_eq!(name.as_str(), "宫保鸡丁");
        assert_eq!(name, DishName::new("宫保鸡丁").unwrap());
    }

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(DishName::new(""), Err(CoreError::EmptyDishName));
        assert_eq!(DishName::new(" \t\n "), Err(CoreError::EmptyDishName));
        assert!("   ".parse::<DishName>().is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: DishName = serde_json::from_str(r#"" 水煮鱼 ""#).unwrap();
        assert_eq!(ok.as_str(), "水煮鱼");
        assert!(serde_json::from_str::<DishName>(r#""  ""#).is_err());
    }
}
