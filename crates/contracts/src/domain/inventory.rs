//! Warehouse inventory records.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::{require, ValidationError};
use crate::list::{contains_ci, HasId, Searchable, Sortable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryStatus {
    Tersedia,
    Limit,
    #[serde(rename = "Tidak Tersedia")]
    TidakTersedia,
    Diproduksi,
    Perbaikan,
}

impl InventoryStatus {
    pub fn label(self) -> &'static str {
        match self {
            InventoryStatus::Tersedia => "Tersedia",
            InventoryStatus::Limit => "Limit",
            InventoryStatus::TidakTersedia => "Tidak Tersedia",
            InventoryStatus::Diproduksi => "Diproduksi",
            InventoryStatus::Perbaikan => "Perbaikan",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|status| status.label() == s)
    }

    pub fn all() -> [InventoryStatus; 5] {
        [
            InventoryStatus::Tersedia,
            InventoryStatus::Limit,
            InventoryStatus::TidakTersedia,
            InventoryStatus::Diproduksi,
            InventoryStatus::Perbaikan,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    #[serde(rename = "itemCode")]
    pub item_code: String,
    pub quantity: u32,
    pub location: String,
    pub status: InventoryStatus,
}

impl HasId for InventoryItem {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for InventoryItem {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.location, filter)
            || contains_ci(self.status.label(), filter)
            || contains_ci(&self.item_code, filter)
    }
}

impl Sortable for InventoryItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            "quantity" => self.quantity.cmp(&other.quantity),
            "location" => self.location.cmp(&other.location),
            _ => Ordering::Equal,
        }
    }
}

/// Item code derived from the location's initials plus the sequential id,
/// e.g. `("Gudang D", 7)` -> `GD-0007`.
pub fn generate_item_code(location: &str, id: i64) -> String {
    let initials: String = location
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let token = if initials.is_empty() {
        "ITM".to_string()
    } else {
        initials
    };
    format!("{}-{:04}", token, id)
}

/// Form draft: everything is text until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryDraft {
    pub name: String,
    pub item_code: String,
    pub quantity: String,
    pub location: String,
    pub status: String,
}

impl InventoryDraft {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            item_code: item.item_code.clone(),
            quantity: item.quantity.to_string(),
            location: item.location.clone(),
            status: item.status.label().to_string(),
        }
    }

    /// Validate the draft into a record. A blank item code is generated
    /// from the location and the assigned id.
    pub fn validate(&self, id: i64) -> Result<InventoryItem, ValidationError> {
        let name = require("name", &self.name)?;
        let location = require("location", &self.location)?;
        let status = InventoryStatus::parse(self.status.trim())
            .ok_or(ValidationError::MissingField("status"))?;
        let quantity: u32 =
            self.quantity
                .trim()
                .parse()
                .map_err(|_| ValidationError::OutOfRange {
                    field: "quantity",
                    message: "harus berupa angka positif".to_string(),
                })?;
        let item_code = if self.item_code.trim().is_empty() {
            generate_item_code(&location, id)
        } else {
            self.item_code.trim().to_string()
        };
        Ok(InventoryItem {
            id,
            name,
            item_code,
            quantity,
            location,
            status,
        })
    }
}

pub fn seed() -> Vec<InventoryItem> {
    fn item(
        id: i64,
        name: &str,
        quantity: u32,
        location: &str,
        status: InventoryStatus,
    ) -> InventoryItem {
        InventoryItem {
            id,
            name: name.to_string(),
            item_code: generate_item_code(location, id),
            quantity,
            location: location.to_string(),
            status,
        }
    }

    vec![
        item(1, "Rel Kereta", 150, "Gudang A", InventoryStatus::Tersedia),
        item(2, "Baut Khusus", 1200, "Gudang B", InventoryStatus::Tersedia),
        item(3, "Panel Kontrol", 25, "Gudang C", InventoryStatus::Limit),
        item(4, "Kabel Listrik", 500, "Gudang A", InventoryStatus::Tersedia),
        item(5, "Bearing", 80, "Gudang B", InventoryStatus::Limit),
        item(6, "Sistem Hidrolik", 12, "Gudang C", InventoryStatus::TidakTersedia),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{create, delete, next_numeric_id};

    #[test]
    fn add_kabel_then_delete_restores_seed_prefix() {
        let original: Vec<InventoryItem> = seed().into_iter().take(3).collect();
        let draft = InventoryDraft {
            name: "Kabel".into(),
            item_code: String::new(),
            quantity: "50".into(),
            location: "Gudang D".into(),
            status: "Tersedia".into(),
        };
        let id = next_numeric_id(&original);
        assert_eq!(id, 4);
        let record = draft.validate(id).unwrap();
        assert_eq!(record.item_code, "GD-0004");

        let grown = create(original.clone(), record);
        assert_eq!(grown.len(), 4);
        let restored = delete(grown, &id);
        assert_eq!(restored, original);
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let draft = InventoryDraft {
            name: String::new(),
            quantity: "10".into(),
            location: "Gudang A".into(),
            status: "Tersedia".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.validate(1),
            Err(ValidationError::MissingField("name"))
        );

        let draft = InventoryDraft {
            name: "Rel".into(),
            quantity: "banyak".into(),
            location: "Gudang A".into(),
            status: "Tersedia".into(),
            ..Default::default()
        };
        assert!(matches!(
            draft.validate(1),
            Err(ValidationError::OutOfRange { field: "quantity", .. })
        ));
    }

    #[test]
    fn item_code_token_falls_back_without_letters() {
        assert_eq!(generate_item_code("Gudang D", 7), "GD-0007");
        assert_eq!(generate_item_code("", 7), "ITM-0007");
    }

    #[test]
    fn status_serde_uses_display_labels() {
        let json = serde_json::to_string(&InventoryStatus::TidakTersedia).unwrap();
        assert_eq!(json, "\"Tidak Tersedia\"");
        assert_eq!(InventoryStatus::parse("Limit"), Some(InventoryStatus::Limit));
        assert_eq!(InventoryStatus::parse("Habis"), None);
    }
}
