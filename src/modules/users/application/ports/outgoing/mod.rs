pub mod password_hasher;
pub mod user_query;
pub mod user_repository;
