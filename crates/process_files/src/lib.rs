// crates/process_files/src/lib.rs

//! Per-file processing: renaming strategies, marker extraction, then content
//! strategies, with a write only when something changed.

pub mod processor;

pub use processor::{process_file_with_processor, FileProcessor, StrategyPipeline};
