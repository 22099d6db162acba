// src/data_output/mod.rs

pub mod export_writer;

// src/data_output/mod.rs
