pub mod dashboard;
pub mod inventory;
pub mod kalibrasi;
pub mod not_found;
pub mod overhaul;
pub mod personalia;
pub mod produksi;
pub mod quality_control;
pub mod rekayasa;
pub mod stock_production;
