pub mod domain;
pub mod error;
pub mod export;
pub mod list;
pub mod nav;
pub mod repo;
pub mod theme;
