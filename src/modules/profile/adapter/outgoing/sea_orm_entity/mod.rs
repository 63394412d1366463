pub mod avatars;
pub mod user_profiles;
