// src/model/mod.rs

pub mod inputs;
