pub mod password_hashing_service;
pub mod token_hasher;

pub use password_hashing_service::PasswordHashingService;
pub use token_hasher::hash_token;
