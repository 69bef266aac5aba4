// src/stats/mod.rs

pub mod normal;
