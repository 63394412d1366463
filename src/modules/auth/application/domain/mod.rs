pub mod entities;
pub mod password_validation;
