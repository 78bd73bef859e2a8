pub mod create_terminal;
pub mod delete_terminal;
pub mod get_terminal;
pub mod get_terminals;
pub mod update_terminal;
