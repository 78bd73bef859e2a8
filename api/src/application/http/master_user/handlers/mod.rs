pub mod create_master_user;
pub mod delete_master_user;
pub mod get_master_users;
pub mod update_master_user;
