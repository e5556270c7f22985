//! Rolling-stock overhaul jobs with their work-history timeline.

use serde::{Deserialize, Serialize};

use crate::error::{require, require_date, ValidationError};
use crate::list::{contains_ci, HasId, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverhaulStatus {
    Pending,
    Proses,
    Selesai,
}

impl OverhaulStatus {
    pub fn label(self) -> &'static str {
        match self {
            OverhaulStatus::Pending => "Pending",
            OverhaulStatus::Proses => "Proses",
            OverhaulStatus::Selesai => "Selesai",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|status| status.label() == s)
    }

    pub fn all() -> [OverhaulStatus; 3] {
        [
            OverhaulStatus::Pending,
            OverhaulStatus::Proses,
            OverhaulStatus::Selesai,
        ]
    }
}

/// One line of the job's work history, newest last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub timestamp: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverhaulJob {
    pub id: i64,
    pub name: String,
    #[serde(rename = "lokasi")]
    pub location: String,
    pub status: OverhaulStatus,
    /// Estimated completion date, YYYY-MM-DD.
    #[serde(rename = "estimasi")]
    pub estimate_date: String,
    /// Percent complete, `0..=100`.
    pub progress: u8,
    pub history: Vec<HistoryEntry>,
}

impl OverhaulJob {
    /// Append a history line with the next sequential entry id.
    pub fn add_history(&mut self, timestamp: String, description: String) {
        let next_id = self.history.iter().map(|entry| entry.id).max().unwrap_or(0) + 1;
        self.history.push(HistoryEntry {
            id: next_id,
            timestamp,
            description,
        });
    }
}

impl HasId for OverhaulJob {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for OverhaulJob {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.location, filter)
            || contains_ci(self.status.label(), filter)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverhaulDraft {
    pub name: String,
    pub location: String,
    pub status: String,
    pub estimate_date: String,
    pub progress: String,
}

impl OverhaulDraft {
    pub fn from_job(job: &OverhaulJob) -> Self {
        Self {
            name: job.name.clone(),
            location: job.location.clone(),
            status: job.status.label().to_string(),
            estimate_date: job.estimate_date.clone(),
            progress: job.progress.to_string(),
        }
    }

    /// Validate into a record, keeping the existing history when editing.
    pub fn validate(
        &self,
        id: i64,
        history: Vec<HistoryEntry>,
    ) -> Result<OverhaulJob, ValidationError> {
        let name = require("name", &self.name)?;
        let location = require("lokasi", &self.location)?;
        let status = OverhaulStatus::parse(self.status.trim())
            .ok_or(ValidationError::MissingField("status"))?;
        let estimate = require_date("estimasi", &self.estimate_date)?;
        let progress: u8 =
            self.progress
                .trim()
                .parse()
                .ok()
                .filter(|p| *p <= 100)
                .ok_or_else(|| ValidationError::OutOfRange {
                    field: "progress",
                    message: "harus 0-100".to_string(),
                })?;
        Ok(OverhaulJob {
            id,
            name,
            location,
            status,
            estimate_date: estimate.format("%Y-%m-%d").to_string(),
            progress,
            history,
        })
    }
}

pub fn seed() -> Vec<OverhaulJob> {
    fn entry(id: i64, timestamp: &str, description: &str) -> HistoryEntry {
        HistoryEntry {
            id,
            timestamp: timestamp.to_string(),
            description: description.to_string(),
        }
    }

    fn job(
        id: i64,
        name: &str,
        location: &str,
        status: OverhaulStatus,
        estimate_date: &str,
        progress: u8,
        history: Vec<HistoryEntry>,
    ) -> OverhaulJob {
        OverhaulJob {
            id,
            name: name.to_string(),
            location: location.to_string(),
            status,
            estimate_date: estimate_date.to_string(),
            progress,
            history,
        }
    }

    vec![
        job(
            1,
            "KRD CC201-01",
            "Balai Yasa Yogyakarta",
            OverhaulStatus::Proses,
            "2025-07-20",
            75,
            vec![
                entry(1, "2025-07-01T10:00:00Z", "Mulai perbaikan mesin utama."),
                entry(2, "2025-07-05T14:30:00Z", "Penggantian komponen rem depan."),
            ],
        ),
        job(
            2,
            "PM 202-EX",
            "Dipo Jakarta",
            OverhaulStatus::Selesai,
            "2025-07-01",
            100,
            vec![
                entry(1, "2025-06-10T09:00:00Z", "Inspeksi awal dan identifikasi masalah."),
                entry(2, "2025-06-20T11:00:00Z", "Penyelesaian perbaikan kelistrikan."),
                entry(3, "2025-07-01T16:00:00Z", "Uji coba dan dinyatakan selesai."),
            ],
        ),
        job(3, "Signal 7A", "Bandung Selatan", OverhaulStatus::Pending, "2025-08-10", 0, vec![]),
        job(
            4,
            "Lokomotif BB304",
            "Balai Yasa Surabaya",
            OverhaulStatus::Proses,
            "2025-07-08",
            40,
            vec![entry(1, "2025-07-01T09:00:00Z", "Inspeksi awal dan perencanaan.")],
        ),
        job(
            5,
            "Gerbong Barang",
            "Gudang Cirebon",
            OverhaulStatus::Selesai,
            "2025-06-15",
            100,
            vec![
                entry(1, "2025-06-01T10:00:00Z", "Perbaikan kerusakan minor."),
                entry(2, "2025-06-15T12:00:00Z", "Pengecatan dan finalisasi."),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_ids_are_sequential_per_job() {
        let mut job = seed().remove(0);
        job.add_history("2025-07-10T08:00:00Z".into(), "Pengecekan akhir.".into());
        assert_eq!(job.history.last().unwrap().id, 3);

        let mut empty = seed().remove(2);
        empty.add_history("2025-08-01T08:00:00Z".into(), "Mulai inspeksi.".into());
        assert_eq!(empty.history.last().unwrap().id, 1);
    }

    #[test]
    fn edit_keeps_history() {
        let job = seed().remove(0);
        let mut draft = OverhaulDraft::from_job(&job);
        draft.progress = "80".into();
        let updated = draft.validate(job.id, job.history.clone()).unwrap();
        assert_eq!(updated.history, job.history);
        assert_eq!(updated.progress, 80);
    }

    #[test]
    fn progress_over_100_is_rejected() {
        let draft = OverhaulDraft {
            name: "Signal 7A".into(),
            location: "Bandung".into(),
            status: "Proses".into(),
            estimate_date: "2025-08-10".into(),
            progress: "120".into(),
        };
        assert!(draft.validate(3, vec![]).is_err());
    }
}
