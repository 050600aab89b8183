use serde::{Deserialize, Serialize};

/// Inventory item - one entry per distinct name
///
/// The name doubles as the document key in the store; there is no separate
/// identifier. A stored item always has `quantity >= 1`: a quantity that
/// would drop to zero deletes the document instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name (unique key, case-preserving)
    #[serde(rename = "_id", alias = "name")]
    pub name: String,
    /// Current quantity (always >= 1 while the item exists)
    pub quantity: u32,
    /// Optional string-encoded still image (data URL)
    pub image: Option<String>,
}

/// Document body written by an upsert
///
/// An upsert is a full replace of the document's fields, not a partial
/// patch: callers must supply every field they want retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub quantity: u32,
    pub image: Option<String>,
}

/// Per-name state as observed through a store read
///
/// The store itself only knows presence/absence of a document; this makes
/// the implicit state machine explicit for the mutation protocol:
/// `Absent -> Present(1)` on add, `Present(n) -> Present(n+1)` on add,
/// `Present(n>1) -> Present(n-1)` on decrement, `Present(1) -> Absent` on
/// decrement, `Present(*) -> Absent` on remove. `Absent` is re-enterable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemState {
    Absent,
    Present { quantity: u32, image: Option<String> },
}

impl From<Option<ItemFields>> for ItemState {
    fn from(fields: Option<ItemFields>) -> Self {
        match fields {
            None => ItemState::Absent,
            Some(f) => ItemState::Present {
                quantity: f.quantity,
                image: f.image,
            },
        }
    }
}

impl Item {
    pub fn new(name: impl Into<String>, fields: ItemFields) -> Self {
        Self {
            name: name.into(),
            quantity: fields.quantity,
            image: fields.image,
        }
    }

    pub fn fields(&self) -> ItemFields {
        ItemFields {
            quantity: self.quantity,
            image: self.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_absent_read() {
        assert_eq!(ItemState::from(None), ItemState::Absent);
    }

    #[test]
    fn test_state_from_present_read() {
        let fields = ItemFields {
            quantity: 3,
            image: Some("data:image/png;base64,xyz".to_string()),
        };
        assert_eq!(
            ItemState::from(Some(fields)),
            ItemState::Present {
                quantity: 3,
                image: Some("data:image/png;base64,xyz".to_string()),
            }
        );
    }

    #[test]
    fn test_item_round_trips_fields() {
        let item = Item::new(
            "apple",
            ItemFields {
                quantity: 2,
                image: None,
            },
        );
        assert_eq!(item.name, "apple");
        assert_eq!(
            item.fields(),
            ItemFields {
                quantity: 2,
                image: None
            }
        );
    }
}
