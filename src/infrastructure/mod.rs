//! Platform utilities: filesystem path resolution.

pub mod paths;

pub use paths::{data_dir, default_storage_file};
