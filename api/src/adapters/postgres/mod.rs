//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod producer_repo;
pub mod toy_repo;
pub mod user_repo;


pub use producer_repo::PostgresProducerRepository;
pub use toy_repo::PostgresToyRepository;
pub use user_repo::PostgresUserRepository;
