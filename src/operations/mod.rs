// src/operations/mod.rs

pub mod safety_stock;
