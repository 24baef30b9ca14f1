// src/debug/visualization/mod.rs

pub mod grid;
pub mod svg;
