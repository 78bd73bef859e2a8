pub mod get_dashboard_master_users;
pub mod get_series;
pub mod get_summary;
