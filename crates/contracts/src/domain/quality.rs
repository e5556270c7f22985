//! Quality-control test entries, grouped by originating department.
//! The QC table is the one page with column sorting.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::{require, require_date, ValidationError};
use crate::list::{contains_ci, HasId, Searchable, Sortable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Production,
    Overhaul,
    Rekayasa,
    Kalibrasi,
}

impl Department {
    pub fn label(self) -> &'static str {
        match self {
            Department::Production => "Production",
            Department::Overhaul => "Overhaul",
            Department::Rekayasa => "Rekayasa",
            Department::Kalibrasi => "Kalibrasi",
        }
    }

    /// Id prefix for entries originating in this department.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Department::Production => "PRD",
            Department::Overhaul => "OVH",
            Department::Rekayasa => "RKY",
            Department::Kalibrasi => "KAL",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|dept| dept.label() == s)
    }

    pub fn all() -> [Department; 4] {
        [
            Department::Production,
            Department::Overhaul,
            Department::Rekayasa,
            Department::Kalibrasi,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QcStatus {
    Lulus,
    #[serde(rename = "Tidak Lulus")]
    TidakLulus,
    #[serde(rename = "Dalam Proses")]
    DalamProses,
    #[serde(rename = "Dalam Perbaikan")]
    DalamPerbaikan,
}

impl QcStatus {
    pub fn label(self) -> &'static str {
        match self {
            QcStatus::Lulus => "Lulus",
            QcStatus::TidakLulus => "Tidak Lulus",
            QcStatus::DalamProses => "Dalam Proses",
            QcStatus::DalamPerbaikan => "Dalam Perbaikan",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        [
            QcStatus::Lulus,
            QcStatus::TidakLulus,
            QcStatus::DalamProses,
            QcStatus::DalamPerbaikan,
        ]
        .into_iter()
        .find(|status| status.label() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QcEntry {
    /// Department-prefixed sequence id, e.g. `PRD-001`.
    pub id: String,
    pub product: String,
    pub batch: String,
    pub status: QcStatus,
    pub tested: u32,
    pub passed: u32,
    pub date: String,
    pub department: Department,
}

impl QcEntry {
    /// Pass rate in percent, 0 when nothing was tested.
    pub fn pass_rate(&self) -> u8 {
        if self.tested == 0 {
            return 0;
        }
        (self.passed * 100 / self.tested) as u8
    }

    /// Failed items go back to their department for rework.
    pub fn send_for_repair(&mut self) {
        self.status = QcStatus::DalamPerbaikan;
    }
}

impl HasId for QcEntry {
    type Id = String;
    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Searchable for QcEntry {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.id, filter)
            || contains_ci(&self.product, filter)
            || contains_ci(&self.batch, filter)
            || contains_ci(self.status.label(), filter)
            || contains_ci(self.department.label(), filter)
    }
}

impl Sortable for QcEntry {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "product" => self.product.cmp(&other.product),
            "batch" => self.batch.cmp(&other.batch),
            "tested" => self.tested.cmp(&other.tested),
            "passed" => self.passed.cmp(&other.passed),
            "date" => self.date.cmp(&other.date),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QcDraft {
    pub product: String,
    pub batch: String,
    pub tested: String,
    pub passed: String,
    pub status: String,
    pub date: String,
    pub department: String,
}

impl QcDraft {
    pub fn validate(&self, id: String) -> Result<QcEntry, ValidationError> {
        let product = require("product", &self.product)?;
        let batch = require("batch", &self.batch)?;
        let status = QcStatus::parse(self.status.trim())
            .ok_or(ValidationError::MissingField("status"))?;
        let department = Department::parse(self.department.trim())
            .ok_or(ValidationError::MissingField("department"))?;
        let date = require_date("date", &self.date)?;
        let tested: u32 =
            self.tested
                .trim()
                .parse()
                .map_err(|_| ValidationError::OutOfRange {
                    field: "tested",
                    message: "harus berupa angka".to_string(),
                })?;
        let passed: u32 =
            self.passed
                .trim()
                .parse()
                .map_err(|_| ValidationError::OutOfRange {
                    field: "passed",
                    message: "harus berupa angka".to_string(),
                })?;
        if passed > tested {
            return Err(ValidationError::OutOfRange {
                field: "passed",
                message: "tidak boleh melebihi jumlah yang diuji".to_string(),
            });
        }
        Ok(QcEntry {
            id,
            product,
            batch,
            status,
            tested,
            passed,
            date: date.format("%Y-%m-%d").to_string(),
            department,
        })
    }
}

pub fn seed() -> Vec<QcEntry> {
    fn qc(
        id: &str,
        product: &str,
        batch: &str,
        status: QcStatus,
        tested: u32,
        passed: u32,
        date: &str,
        department: Department,
    ) -> QcEntry {
        QcEntry {
            id: id.to_string(),
            product: product.to_string(),
            batch: batch.to_string(),
            status,
            tested,
            passed,
            date: date.to_string(),
            department,
        }
    }

    vec![
        qc("PRD-001", "Radio Lokomotif", "BATCH-2023-11", QcStatus::Lulus, 25, 25, "2023-11-05", Department::Production),
        qc("PRD-002", "Way Station", "BATCH-2023-10", QcStatus::Lulus, 30, 28, "2023-10-28", Department::Production),
        qc("PRD-003", "Sentranik", "BATCH-2023-11", QcStatus::DalamProses, 15, 12, "2023-11-12", Department::Production),
        qc("OVH-001", "Point Machine A", "BATCH-2023-09", QcStatus::TidakLulus, 20, 15, "2023-09-20", Department::Overhaul),
        qc("OVH-002", "Point Machine B", "BATCH-2023-10", QcStatus::Lulus, 18, 18, "2023-10-15", Department::Overhaul),
        qc("RKY-001", "Control Panel", "BATCH-2023-11", QcStatus::Lulus, 10, 9, "2023-11-08", Department::Rekayasa),
        qc("RKY-002", "Signal System", "BATCH-2023-10", QcStatus::DalamProses, 12, 10, "2023-10-30", Department::Rekayasa),
        qc("KAL-001", "Battery Pack", "BATCH-2023-11", QcStatus::Lulus, 50, 48, "2023-11-10", Department::Kalibrasi),
        qc("KAL-002", "Cable Set", "BATCH-2023-09", QcStatus::TidakLulus, 30, 25, "2023-09-25", Department::Kalibrasi),
    ]
}

/// Entries of one department, in seed order.
pub fn by_department(entries: &[QcEntry], department: Department) -> Vec<QcEntry> {
    entries
        .iter()
        .filter(|entry| entry.department == department)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{next_prefixed_id, sort_list};

    #[test]
    fn sorting_by_tested_then_reversing_preserves_row_identity() {
        let mut entries = seed();
        let ids_before: Vec<String> = entries.iter().map(|e| e.id.clone()).collect();

        sort_list(&mut entries, "tested", true);
        let asc: Vec<u32> = entries.iter().map(|e| e.tested).collect();
        let mut expected = asc.clone();
        expected.sort();
        assert_eq!(asc, expected);

        sort_list(&mut entries, "tested", false);
        let desc: Vec<u32> = entries.iter().map(|e| e.tested).collect();
        let mut expected_desc = desc.clone();
        expected_desc.sort_by(|a, b| b.cmp(a));
        assert_eq!(desc, expected_desc);

        let mut ids_after: Vec<String> = entries.iter().map(|e| e.id.clone()).collect();
        ids_after.sort();
        let mut ids_sorted = ids_before;
        ids_sorted.sort();
        assert_eq!(ids_after, ids_sorted);
    }

    #[test]
    fn new_entry_id_scoped_to_department_prefix() {
        let entries = seed();
        assert_eq!(
            next_prefixed_id(Department::Production.id_prefix(), &entries),
            "PRD-004"
        );
        assert_eq!(
            next_prefixed_id(Department::Overhaul.id_prefix(), &entries),
            "OVH-003"
        );
    }

    #[test]
    fn passed_cannot_exceed_tested() {
        let draft = QcDraft {
            product: "Battery Pack".into(),
            batch: "BATCH-2024-01".into(),
            tested: "10".into(),
            passed: "12".into(),
            status: "Lulus".into(),
            date: "2024-01-15".into(),
            department: "Kalibrasi".into(),
        };
        assert!(matches!(
            draft.validate("KAL-003".into()),
            Err(ValidationError::OutOfRange { field: "passed", .. })
        ));
    }

    #[test]
    fn send_for_repair_flips_status() {
        let mut entry = seed().remove(3);
        assert_eq!(entry.status, QcStatus::TidakLulus);
        entry.send_for_repair();
        assert_eq!(entry.status, QcStatus::DalamPerbaikan);
    }

    #[test]
    fn pass_rate_handles_zero_tested() {
        let mut entry = seed().remove(0);
        assert_eq!(entry.pass_rate(), 100);
        entry.tested = 0;
        assert_eq!(entry.pass_rate(), 0);
    }

    #[test]
    fn repair_changes_the_row_value_but_not_its_id() {
        let mut entries = seed();
        let before = entries.clone();
        if let Some(entry) = entries.iter_mut().find(|e| e.id == "OVH-001") {
            entry.send_for_repair();
        }
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        let ids_before: Vec<&str> = before.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ids_before);
        assert_ne!(entries, before);
    }

    #[test]
    fn department_filter_keeps_seed_order() {
        let production = by_department(&seed(), Department::Production);
        let ids: Vec<&str> = production.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["PRD-001", "PRD-002", "PRD-003"]);
    }
}
