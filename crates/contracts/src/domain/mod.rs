pub mod inventory;
pub mod kalibrasi;
pub mod overhaul;
pub mod personalia;
pub mod produksi;
pub mod quality;
pub mod rekayasa;
pub mod stock;
