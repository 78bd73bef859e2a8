pub mod terminal_repository;

pub use terminal_repository::PostgresTerminalRepository;
