pub mod avatar_policy;
pub mod entities;
