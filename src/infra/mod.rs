pub mod browse;
pub mod export;
pub mod fs;
pub mod import;
pub mod pdf;
pub mod store;
