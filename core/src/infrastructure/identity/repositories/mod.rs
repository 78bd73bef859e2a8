pub mod master_user_repository;

pub use master_user_repository::PostgresMasterUserRepository;
