mod api;
mod image;
mod notice;
mod store;

pub use api::{HttpApi, MemoryApi, PortfolioApi, SiteApi};
pub use image::{encode_data_uri, encode_upload};
pub use notice::{Notice, NoticeKind};
pub use store::{Operation, PortfolioStore, RequestSequence, Ticket};

use std::{fmt, str::FromStr};

use http::StatusCode;
use serde::{
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use thiserror::Error;

/// Gallery style, also the category a portfolio item is filed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Minimalism,
    Geometry,
    Typography,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Minimalism, Self::Geometry, Self::Typography];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimalism => "minimalism",
            Self::Geometry => "geometry",
            Self::Typography => "typography",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Minimalism => "Minimalism",
            Self::Geometry => "Geometry",
            Self::Typography => "Typography",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Category as reported by the store. Values outside [`Category`] are kept
/// verbatim so they can still be shown as a badge. A missing or `null`
/// category becomes an empty `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ItemCategory {
    Known(Category),
    Other(String),
}

impl Default for ItemCategory {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl<'de> Deserialize<'de> for ItemCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ItemCategoryVisitor)
    }
}

/// Accepts any JSON value so one odd item never fails the whole list.
struct ItemCategoryVisitor;

impl ItemCategoryVisitor {
    fn other<E>(value: impl fmt::Display) -> Result<ItemCategory, E> {
        Ok(ItemCategory::Other(value.to_string()))
    }
}

impl<'de> Visitor<'de> for ItemCategoryVisitor {
    type Value = ItemCategory;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a category")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.parse::<Category>()
            .map(ItemCategory::Known)
            .unwrap_or_else(|_| ItemCategory::Other(v.to_string())))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Self::other(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Self::other(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Self::other(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Self::other(v)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ItemCategory::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ItemCategory::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(ItemCategory::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(ItemCategory::default())
    }
}

impl ItemCategory {
    pub fn is(&self, category: Category) -> bool {
        matches!(self, Self::Known(c) if *c == category)
    }

    pub fn badge(&self) -> &str {
        match self {
            Self::Known(c) => c.as_str(),
            Self::Other(s) => s,
        }
    }
}

impl From<Category> for ItemCategory {
    fn from(value: Category) -> Self {
        Self::Known(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub category: ItemCategory,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A portfolio item that has not been sent to the store yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioDraft {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub image_url: String,
}

impl PortfolioDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.image_url.is_empty() {
            missing.push("image");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("store rejected request: {0}")]
    Rejected(StatusCode),
}

pub fn filter_by_category(items: &[PortfolioItem], category: Category) -> Vec<PortfolioItem> {
    items
        .iter()
        .filter(|item| item.category.is(category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, category: &str) -> PortfolioItem {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Item {id}"),
            "category": category,
            "image_url": "https://cdn.example.com/a.jpg",
        }))
        .expect("item should deserialize")
    }

    #[test]
    fn test_category_wire_format() {
        assert_eq!(
            serde_json::to_string(&Category::Geometry).unwrap(),
            "\"geometry\""
        );
        assert_eq!("typography".parse::<Category>(), Ok(Category::Typography));
        assert!("Typography".parse::<Category>().is_err());
        assert_eq!(Category::default(), Category::Minimalism);
    }

    #[test]
    fn test_unknown_category_is_kept_verbatim() {
        let item = item(7, "brutalism");
        assert_eq!(item.category, ItemCategory::Other("brutalism".to_string()));
        assert_eq!(item.category.badge(), "brutalism");
        for c in Category::ALL {
            assert!(!item.category.is(c));
        }
    }

    #[test]
    fn test_odd_categories_do_not_fail_the_list() {
        let raw = r#"[
            {"id":1,"title":"A","category":"geometry","image_url":"u"},
            {"id":2,"title":"B","category":null,"image_url":"u"},
            {"id":3,"title":"C","category":7,"image_url":"u"},
            {"id":4,"title":"D","image_url":"u"},
            {"id":5,"title":"E","category":["x"],"image_url":"u"}
        ]"#;
        let items: Vec<PortfolioItem> = serde_json::from_str(raw).expect("list should parse");
        let badges: Vec<_> = items.iter().map(|i| i.category.badge()).collect();
        assert_eq!(badges, vec!["geometry", "", "7", "", ""]);

        assert_eq!(filter_by_category(&items, Category::Geometry).len(), 1);
        for c in [Category::Minimalism, Category::Typography] {
            assert!(filter_by_category(&items, c).is_empty());
        }
    }

    #[test]
    fn test_item_from_store_payload() {
        let raw = r#"[{"id":3,"title":"Grid","category":"geometry","image_url":"u","description":null,"created_at":"2026-01-15 10:00:00"}]"#;
        let items: Vec<PortfolioItem> = serde_json::from_str(raw).unwrap();
        assert_eq!(items[0].id, 3);
        assert_eq!(items[0].category, ItemCategory::Known(Category::Geometry));
        assert_eq!(items[0].description, None);
        assert_eq!(items[0].created_at.as_deref(), Some("2026-01-15 10:00:00"));
    }

    #[test]
    fn test_filter_by_category() {
        let mirror = vec![item(1, "minimalism"), item(2, "geometry")];

        let geometry = filter_by_category(&mirror, Category::Geometry);
        assert_eq!(geometry.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
        assert!(filter_by_category(&mirror, Category::Typography).is_empty());

        for c in Category::ALL {
            let expected: Vec<_> = mirror
                .iter()
                .filter(|i| i.category == ItemCategory::Known(c))
                .cloned()
                .collect();
            assert_eq!(filter_by_category(&mirror, c), expected);
        }
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = PortfolioDraft::default();
        let err = draft.validate().unwrap_err();
        assert_eq!(err.missing, vec!["title", "image"]);
        assert_eq!(err.to_string(), "missing required fields: title, image");

        draft.title = "Poster A".to_string();
        assert_eq!(draft.validate().unwrap_err().missing, vec!["image"]);

        draft.image_url = "data:image/png;base64,AAAA".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_body_keys() {
        let draft = PortfolioDraft {
            title: "Poster A".to_string(),
            category: Category::Geometry,
            description: String::new(),
            image_url: "data:image/png;base64,AAAA".to_string(),
        };
        let body = serde_json::to_value(&draft).unwrap();
        let mut keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["category", "description", "image_url", "title"]);
        assert_eq!(body["category"], "geometry");
    }
}
