//! Instrument calibration tasks. This is the one record list that
//! survives a page refresh: the page loads and stores it through
//! [`crate::repo::RecordRepository`].

use serde::{Deserialize, Serialize};

use crate::error::{require, require_date, ValidationError};
use crate::list::{contains_ci, HasId, Searchable};

/// Calibration runs through a fixed five-step procedure; `progress`
/// counts completed steps.
pub const MAX_PROGRESS_STEPS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalibrationStatus {
    #[serde(rename = "Belum Dimulai")]
    BelumDimulai,
    #[serde(rename = "Dalam Proses")]
    DalamProses,
    Selesai,
}

impl CalibrationStatus {
    pub fn label(self) -> &'static str {
        match self {
            CalibrationStatus::BelumDimulai => "Belum Dimulai",
            CalibrationStatus::DalamProses => "Dalam Proses",
            CalibrationStatus::Selesai => "Selesai",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|status| status.label() == s)
    }

    pub fn all() -> [CalibrationStatus; 3] {
        [
            CalibrationStatus::BelumDimulai,
            CalibrationStatus::DalamProses,
            CalibrationStatus::Selesai,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationTask {
    pub id: i64,
    pub name: String,
    pub status: CalibrationStatus,
    /// Completed steps, `0..=MAX_PROGRESS_STEPS`.
    pub progress: u8,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

impl HasId for CalibrationTask {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for CalibrationTask {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter) || contains_ci(self.status.label(), filter)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalibrationDraft {
    pub name: String,
    pub status: String,
    pub progress: String,
    pub due_date: String,
}

impl CalibrationDraft {
    pub fn from_task(task: &CalibrationTask) -> Self {
        Self {
            name: task.name.clone(),
            status: task.status.label().to_string(),
            progress: task.progress.to_string(),
            due_date: task.due_date.clone(),
        }
    }

    pub fn validate(&self, id: i64) -> Result<CalibrationTask, ValidationError> {
        let name = require("name", &self.name)?;
        let status = CalibrationStatus::parse(self.status.trim())
            .ok_or(ValidationError::MissingField("status"))?;
        let due = require_date("dueDate", &self.due_date)?;
        let progress: u8 =
            self.progress
                .trim()
                .parse()
                .map_err(|_| ValidationError::OutOfRange {
                    field: "progress",
                    message: "harus berupa angka".to_string(),
                })?;
        if progress > MAX_PROGRESS_STEPS {
            return Err(ValidationError::OutOfRange {
                field: "progress",
                message: format!("maksimal {MAX_PROGRESS_STEPS} langkah"),
            });
        }
        Ok(CalibrationTask {
            id,
            name,
            status,
            progress,
            due_date: due.format("%Y-%m-%d").to_string(),
        })
    }
}

pub fn seed() -> Vec<CalibrationTask> {
    fn task(
        id: i64,
        name: &str,
        status: CalibrationStatus,
        progress: u8,
        due_date: &str,
    ) -> CalibrationTask {
        CalibrationTask {
            id,
            name: name.to_string(),
            status,
            progress,
            due_date: due_date.to_string(),
        }
    }

    vec![
        task(1, "Multimeter Digital", CalibrationStatus::DalamProses, 2, "2023-12-15"),
        task(2, "Oscilloscope", CalibrationStatus::Selesai, 5, "2023-11-30"),
        task(3, "Signal Generator", CalibrationStatus::BelumDimulai, 0, "2024-01-10"),
        task(4, "Power Supply", CalibrationStatus::DalamProses, 3, "2023-12-05"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_capped_at_step_count() {
        let draft = CalibrationDraft {
            name: "Multimeter".into(),
            status: "Dalam Proses".into(),
            progress: "6".into(),
            due_date: "2024-01-01".into(),
        };
        assert!(matches!(
            draft.validate(1),
            Err(ValidationError::OutOfRange { field: "progress", .. })
        ));
    }

    #[test]
    fn draft_round_trips_through_edit() {
        let task = seed().remove(0);
        let rebuilt = CalibrationDraft::from_task(&task).validate(task.id).unwrap();
        assert_eq!(rebuilt, task);
    }

    #[test]
    fn bad_due_date_is_rejected() {
        let draft = CalibrationDraft {
            name: "Power Supply".into(),
            status: "Selesai".into(),
            progress: "5".into(),
            due_date: "05-12-2023".into(),
        };
        assert_eq!(
            draft.validate(1),
            Err(ValidationError::InvalidDate("dueDate"))
        );
    }

    #[test]
    fn status_serde_matches_original_labels() {
        let json = serde_json::to_string(&CalibrationStatus::BelumDimulai).unwrap();
        assert_eq!(json, "\"Belum Dimulai\"");
    }
}
