// src/chart/mod.rs

pub mod series;
