pub mod config;
pub mod entrypoints;
pub mod imports;
pub mod imports_table;
pub mod packages;
pub mod stats;
pub mod structs;
pub mod types;
