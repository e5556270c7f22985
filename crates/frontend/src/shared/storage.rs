//! Browser-storage backend for the calibration record repository.

use anyhow::{anyhow, Result};
use contracts::domain::kalibrasi::CalibrationTask;
use contracts::repo::{decode_or_seed, RecordRepository};
use web_sys::window;

/// localStorage key holding the calibration record list as JSON.
pub const KALIBRASI_STORAGE_KEY: &str = "balai_yasa_kalibrasi";

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorageRepository;

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

impl RecordRepository for BrowserStorageRepository {
    fn load(&self) -> Vec<CalibrationTask> {
        let raw =
            local_storage().and_then(|storage| storage.get_item(KALIBRASI_STORAGE_KEY).ok().flatten());
        decode_or_seed(raw.as_deref())
    }

    fn save(&self, records: &[CalibrationTask]) -> Result<()> {
        let text = serde_json::to_string(records)?;
        let storage = local_storage().ok_or_else(|| anyhow!("localStorage tidak tersedia"))?;
        storage
            .set_item(KALIBRASI_STORAGE_KEY, &text)
            .map_err(|_| anyhow!("gagal menulis ke localStorage"))?;
        Ok(())
    }
}
