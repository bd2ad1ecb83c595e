pub mod config;
pub mod ease;
pub mod simulate;
