// src/economics/mod.rs

pub mod costs;
pub mod scenarios;
pub mod service_level;
