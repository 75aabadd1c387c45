pub mod catalog_service;
pub mod save_service;
pub mod sheet_service;
