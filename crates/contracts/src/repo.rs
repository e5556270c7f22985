//! Repository seam for the one page that persists its records.
//!
//! The page logic only talks to this trait, so browser storage can be
//! swapped for anything else (or for the in-memory test double below)
//! without touching the component.

use anyhow::Result;

use crate::domain::kalibrasi::CalibrationTask;

/// Loads and stores the calibration record list.
///
/// `load` is infallible by contract: absent or corrupt stored data falls
/// back to the built-in seed list silently.
pub trait RecordRepository {
    fn load(&self) -> Vec<CalibrationTask>;
    fn save(&self, records: &[CalibrationTask]) -> Result<()>;
}

/// Decode a persisted record list, falling back to the seed on any
/// corruption. Shared by every repository implementation.
pub fn decode_or_seed(raw: Option<&str>) -> Vec<CalibrationTask> {
    raw.and_then(|text| serde_json::from_str(text).ok())
        .unwrap_or_else(crate::domain::kalibrasi::seed)
}

/// In-memory repository used by tests and as a reference implementation.
#[derive(Default)]
pub struct InMemoryRepository {
    stored: std::cell::RefCell<Option<String>>,
}

impl RecordRepository for InMemoryRepository {
    fn load(&self) -> Vec<CalibrationTask> {
        decode_or_seed(self.stored.borrow().as_deref())
    }

    fn save(&self, records: &[CalibrationTask]) -> Result<()> {
        let text = serde_json::to_string(records)?;
        *self.stored.borrow_mut() = Some(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kalibrasi;

    #[test]
    fn load_falls_back_to_seed_when_empty() {
        let repo = InMemoryRepository::default();
        assert_eq!(repo.load(), kalibrasi::seed());
    }

    #[test]
    fn load_falls_back_to_seed_on_corrupt_json() {
        assert_eq!(decode_or_seed(Some("{not json")), kalibrasi::seed());
        assert_eq!(decode_or_seed(Some("42")), kalibrasi::seed());
    }

    #[test]
    fn save_then_load_round_trips() {
        let repo = InMemoryRepository::default();
        let mut records = kalibrasi::seed();
        records.retain(|task| task.id != 2);
        repo.save(&records).unwrap();
        assert_eq!(repo.load(), records);
    }
}
