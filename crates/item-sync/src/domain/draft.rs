//! Form Draft
//!
//! Raw, unvalidated form input and the create/update mode it is bound to.

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemId, ItemPayload};
use crate::error::ValidationError;

/// Text form of an item pending submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    pub name: String,
    /// Empty string stands for "no description" on submission
    pub description: String,
    /// Raw price text, parsed only on validation
    pub price: String,
}

/// One editable input of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Price,
}

impl DraftField {
    /// Inputs the form marks `required`
    pub fn is_required(&self) -> bool {
        matches!(self, DraftField::Name | DraftField::Price)
    }
}

impl FormDraft {
    /// Populate a draft from an existing item
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            price: item.price.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Description => self.description = value,
            DraftField::Price => self.price = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
        }
    }

    /// Trim, normalize and parse the draft into a request payload
    pub fn validate(&self) -> Result<ItemPayload, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidPrice)?;
        // `parse` accepts "inf" and "NaN"
        if !price.is_finite() {
            return Err(ValidationError::InvalidPrice);
        }

        let description = self.description.trim();
        Ok(ItemPayload {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            price,
        })
    }
}

/// Whether submitting the draft creates a new item or updates an existing one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditingTarget {
    /// Create mode
    #[default]
    Creating,
    /// Update mode, bound to exactly this identifier
    Editing(ItemId),
}

impl EditingTarget {
    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            EditingTarget::Creating => None,
            EditingTarget::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditingTarget::Editing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, description: &str, price: &str) -> FormDraft {
        FormDraft {
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_validate_trims_and_normalizes() {
        let payload = draft("  Tea ", "", "4").validate().unwrap();
        assert_eq!(payload.name, "Tea");
        assert_eq!(payload.description, None);
        assert_eq!(payload.price, 4.0);

        let payload = draft("Coffee", "  light roast ", " 12.50 ").validate().unwrap();
        assert_eq!(payload.description.as_deref(), Some("light roast"));
        assert_eq!(payload.price, 12.5);
    }

    #[test]
    fn test_whitespace_description_is_absent() {
        let payload = draft("Tea", "   ", "1").validate().unwrap();
        assert_eq!(payload.description, None);
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        assert_eq!(draft("", "", "4").validate(), Err(ValidationError::MissingName));
        assert_eq!(draft("   ", "x", "4").validate(), Err(ValidationError::MissingName));
        assert_eq!(draft("Tea", "", "four").validate(), Err(ValidationError::InvalidPrice));
        assert_eq!(draft("Tea", "", "").validate(), Err(ValidationError::InvalidPrice));
        assert_eq!(draft("Tea", "", "   ").validate(), Err(ValidationError::InvalidPrice));
        assert_eq!(draft("Tea", "", "NaN").validate(), Err(ValidationError::InvalidPrice));
        assert_eq!(draft("Tea", "", "inf").validate(), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn test_negative_price_is_accepted() {
        let payload = draft("Refund", "", "-1").validate().unwrap();
        assert_eq!(payload.price, -1.0);
    }

    #[test]
    fn test_from_item() {
        let item = Item::new(1, "Coffee", None, 12.5);
        assert_eq!(FormDraft::from_item(&item), draft("Coffee", "", "12.5"));

        let item = Item::new(2, "Tea", Some("Green"), 4.0);
        assert_eq!(FormDraft::from_item(&item), draft("Tea", "Green", "4"));
    }

    #[test]
    fn test_set_field() {
        let mut d = FormDraft::default();
        assert!(d.is_empty());
        d.set(DraftField::Price, "3.2".to_string());
        assert_eq!(d.get(DraftField::Price), "3.2");
        assert!(!d.is_empty());
    }

    #[test]
    fn test_required_fields() {
        assert!(DraftField::Name.is_required());
        assert!(DraftField::Price.is_required());
        assert!(!DraftField::Description.is_required());
    }

    #[test]
    fn test_editing_target() {
        assert!(!EditingTarget::default().is_editing());
        let target = EditingTarget::Editing(ItemId::Number(7));
        assert_eq!(target.item_id(), Some(&ItemId::Number(7)));
    }
}
