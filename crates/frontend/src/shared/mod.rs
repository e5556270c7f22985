pub mod components;
pub mod date_utils;
pub mod download;
pub mod icons;
pub mod storage;
pub mod theme;
pub mod toast;
