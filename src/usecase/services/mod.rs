pub mod chart_service;
pub mod entry_service;
pub mod export_service;
pub mod import_service;
