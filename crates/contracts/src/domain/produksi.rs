//! Production orders: target vs. completed units, assigned personnel,
//! bill of materials and a progress log.

use serde::{Deserialize, Serialize};

use crate::error::{require, require_date, ValidationError};
use crate::list::{contains_ci, HasId, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionStatus {
    #[serde(rename = "Dalam Proses")]
    DalamProses,
    Selesai,
    Tertunda,
}

impl ProductionStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProductionStatus::DalamProses => "Dalam Proses",
            ProductionStatus::Selesai => "Selesai",
            ProductionStatus::Tertunda => "Tertunda",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub qty: u32,
    /// Unit price in rupiah.
    pub harga: u64,
    pub satuan: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub date: String,
    pub completed: u32,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOrder {
    /// Prefixed sequence id, `PRD-001` style.
    pub id: String,
    pub name: String,
    pub target: u32,
    pub completed: u32,
    pub status: ProductionStatus,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub personnel: Vec<String>,
    pub materials: Vec<Material>,
    pub progress: Vec<ProgressEntry>,
}

impl ProductionOrder {
    /// Percent complete against the target, clamped to 100.
    pub fn percent_complete(&self) -> u8 {
        if self.target == 0 {
            return 0;
        }
        ((self.completed * 100 / self.target).min(100)) as u8
    }

    /// Total material cost in rupiah.
    pub fn material_cost(&self) -> u64 {
        self.materials
            .iter()
            .map(|material| material.harga * u64::from(material.qty))
            .sum()
    }
}

impl HasId for ProductionOrder {
    type Id = String;
    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Searchable for ProductionOrder {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.id, filter)
            || contains_ci(&self.name, filter)
            || contains_ci(self.status.label(), filter)
    }
}

/// Draft for the multi-step "new production" dialog. Personnel and
/// materials are collected incrementally before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductionDraft {
    pub name: String,
    pub target: String,
    pub start_date: String,
    pub end_date: String,
    pub personnel: Vec<String>,
    pub materials: Vec<Material>,
}

impl ProductionDraft {
    pub fn validate(&self, id: String) -> Result<ProductionOrder, ValidationError> {
        let name = require("name", &self.name)?;
        let target: u32 = self
            .target
            .trim()
            .parse()
            .ok()
            .filter(|t| *t > 0)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "target",
                message: "harus lebih dari 0".to_string(),
            })?;
        let start = require_date("startDate", &self.start_date)?;
        let end = require_date("endDate", &self.end_date)?;
        if end < start {
            return Err(ValidationError::OutOfRange {
                field: "endDate",
                message: "tidak boleh sebelum tanggal mulai".to_string(),
            });
        }
        Ok(ProductionOrder {
            id,
            name,
            target,
            completed: 0,
            status: ProductionStatus::DalamProses,
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            personnel: self.personnel.clone(),
            materials: self.materials.clone(),
            progress: Vec::new(),
        })
    }
}

pub fn seed() -> Vec<ProductionOrder> {
    fn material(name: &str, qty: u32, harga: u64, satuan: &str) -> Material {
        Material {
            name: name.to_string(),
            qty,
            harga,
            satuan: satuan.to_string(),
        }
    }

    fn entry(date: &str, completed: u32, notes: &str) -> ProgressEntry {
        ProgressEntry {
            date: date.to_string(),
            completed,
            notes: notes.to_string(),
        }
    }

    vec![
        ProductionOrder {
            id: "PRD-001".to_string(),
            name: "Radio Lokomotif".to_string(),
            target: 100,
            completed: 82,
            status: ProductionStatus::DalamProses,
            start_date: "2023-11-01".to_string(),
            end_date: "2024-07-30".to_string(),
            personnel: vec!["Tim Produksi".to_string()],
            materials: vec![
                material("Modul RF", 100, 50_000, "unit"),
                material("Casing Polimer", 100, 20_000, "unit"),
                material("Kabel Koaksial", 200, 5_000, "meter"),
                material("Antena", 100, 15_000, "unit"),
            ],
            progress: vec![
                entry("2024-07-01", 20, "Assembly 20% selesai"),
                entry("2024-07-10", 50, "Testing dimulai, 30 unit lolos"),
                entry("2024-07-20", 82, "Quality Check tahap 1 selesai untuk 82 unit"),
            ],
        },
        ProductionOrder {
            id: "PRD-002".to_string(),
            name: "Way Station KRL".to_string(),
            target: 50,
            completed: 45,
            status: ProductionStatus::DalamProses,
            start_date: "2024-06-15".to_string(),
            end_date: "2024-07-28".to_string(),
            personnel: vec!["Tim Produksi".to_string()],
            materials: vec![
                material("Unit CPU Industri", 50, 500_000, "unit"),
                material("Router Jaringan", 50, 100_000, "unit"),
                material("Kabel Fiber Optik", 500, 10_000, "meter"),
                material("Sensor Lingkungan", 50, 30_000, "unit"),
            ],
            progress: vec![
                entry("2024-06-25", 30, "Instalasi perangkat keras selesai"),
                entry("2024-07-05", 45, "Konfigurasi sistem 50% rampung"),
            ],
        },
        ProductionOrder {
            id: "PRD-003".to_string(),
            name: "Sistem Persinyalan Baru".to_string(),
            target: 5,
            completed: 5,
            status: ProductionStatus::Selesai,
            start_date: "2024-01-01".to_string(),
            end_date: "2024-03-31".to_string(),
            personnel: vec!["Tim Produksi".to_string()],
            materials: vec![
                material("Mikrokontroler", 5, 100_000, "unit"),
                material("Transistor Daya", 10, 5_000, "buah"),
                material("Relai Solid State", 5, 20_000, "unit"),
            ],
            progress: vec![
                entry("2024-02-01", 50, "Desain dan Manufaktur selesai"),
                entry("2024-03-31", 100, "Proyek selesai dan disertifikasi"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::next_prefixed_id;

    #[test]
    fn new_order_gets_next_prefixed_id() {
        assert_eq!(next_prefixed_id("PRD", &seed()), "PRD-004");
    }

    #[test]
    fn end_before_start_is_rejected() {
        let draft = ProductionDraft {
            name: "Genset Cadangan".into(),
            target: "10".into(),
            start_date: "2024-08-01".into(),
            end_date: "2024-07-01".into(),
            ..Default::default()
        };
        assert!(matches!(
            draft.validate("PRD-004".into()),
            Err(ValidationError::OutOfRange { field: "endDate", .. })
        ));
    }

    #[test]
    fn percent_complete_clamps_and_handles_zero_target() {
        let mut order = seed().remove(0);
        assert_eq!(order.percent_complete(), 82);
        order.completed = 200;
        assert_eq!(order.percent_complete(), 100);
        order.target = 0;
        assert_eq!(order.percent_complete(), 0);
    }

    #[test]
    fn material_cost_sums_qty_times_price() {
        let order = seed().remove(2);
        assert_eq!(order.material_cost(), 5 * 100_000 + 10 * 5_000 + 5 * 20_000);
    }
}
