//! Production stock levels and the recent-activity feed shown beside
//! them.

use serde::{Deserialize, Serialize};

use crate::error::{require, ValidationError};
use crate::list::{contains_ci, HasId, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    Aman,
    Menipis,
    Habis,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Aman => "Aman",
            StockStatus::Menipis => "Menipis",
            StockStatus::Habis => "Habis",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|status| status.label() == s)
    }

    pub fn all() -> [StockStatus; 3] {
        [StockStatus::Aman, StockStatus::Menipis, StockStatus::Habis]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: i64,
    #[serde(rename = "itemName")]
    pub item_name: String,
    pub quantity: u32,
    pub location: String,
    pub status: StockStatus,
    #[serde(rename = "lastUpdate")]
    pub last_update: String,
}

impl HasId for StockItem {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for StockItem {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.item_name, filter)
            || contains_ci(&self.location, filter)
            || contains_ci(self.status.label(), filter)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockDraft {
    pub item_name: String,
    pub quantity: String,
    pub location: String,
    pub status: String,
    pub last_update: String,
}

impl StockDraft {
    pub fn from_item(item: &StockItem) -> Self {
        Self {
            item_name: item.item_name.clone(),
            quantity: item.quantity.to_string(),
            location: item.location.clone(),
            status: item.status.label().to_string(),
            last_update: item.last_update.clone(),
        }
    }

    pub fn validate(&self, id: i64, today: &str) -> Result<StockItem, ValidationError> {
        let item_name = require("itemName", &self.item_name)?;
        let location = require("location", &self.location)?;
        let status = StockStatus::parse(self.status.trim())
            .ok_or(ValidationError::MissingField("status"))?;
        let quantity: u32 =
            self.quantity
                .trim()
                .parse()
                .map_err(|_| ValidationError::OutOfRange {
                    field: "quantity",
                    message: "harus berupa angka positif".to_string(),
                })?;
        Ok(StockItem {
            id,
            item_name,
            quantity,
            location,
            status,
            last_update: today.to_string(),
        })
    }
}

/// Entry in the "recent activities" side list. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub action: String,
    pub time: String,
    pub status: String,
}

pub fn seed() -> Vec<StockItem> {
    fn item(
        id: i64,
        item_name: &str,
        quantity: u32,
        location: &str,
        status: StockStatus,
        last_update: &str,
    ) -> StockItem {
        StockItem {
            id,
            item_name: item_name.to_string(),
            quantity,
            location: location.to_string(),
            status,
            last_update: last_update.to_string(),
        }
    }

    vec![
        item(1, "Komponen Point Machine", 320, "Gudang Produksi 1", StockStatus::Aman, "2023-11-20"),
        item(2, "Modul Radio Lokomotif", 145, "Gudang Produksi 1", StockStatus::Aman, "2023-11-18"),
        item(3, "Sparepart Way Station", 28, "Gudang Produksi 2", StockStatus::Menipis, "2023-11-15"),
        item(4, "Baterai Cadangan", 0, "Gudang Produksi 2", StockStatus::Habis, "2023-11-10"),
        item(5, "Panel Sentranik", 64, "Gudang Produksi 3", StockStatus::Aman, "2023-11-21"),
    ]
}

pub fn seed_activities() -> Vec<Activity> {
    fn activity(id: i64, action: &str, time: &str, status: &str) -> Activity {
        Activity {
            id,
            action: action.to_string(),
            time: time.to_string(),
            status: status.to_string(),
        }
    }

    vec![
        activity(1, "Stok Point Machine diperbarui", "5 menit lalu", "completed"),
        activity(2, "Pengiriman modul radio diterima", "12 menit lalu", "in-progress"),
        activity(3, "Jadwal maintenance diperbarui", "25 menit lalu", "completed"),
        activity(4, "Stok baru ditambahkan", "1 jam lalu", "completed"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_stamps_last_update_with_today() {
        let draft = StockDraft {
            item_name: "Relai".into(),
            quantity: "40".into(),
            location: "Gudang Produksi 3".into(),
            status: "Aman".into(),
            last_update: String::new(),
        };
        let item = draft.validate(6, "2023-11-22").unwrap();
        assert_eq!(item.last_update, "2023-11-22");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let draft = StockDraft {
            item_name: "Relai".into(),
            quantity: "40".into(),
            location: "Gudang".into(),
            status: "Kosong".into(),
            last_update: String::new(),
        };
        assert_eq!(
            draft.validate(6, "2023-11-22"),
            Err(ValidationError::MissingField("status"))
        );
    }
}
