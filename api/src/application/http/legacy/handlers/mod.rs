pub mod commit_import;
pub mod get_db_summary;
pub mod import_preview;
pub mod normalize_inspections;
