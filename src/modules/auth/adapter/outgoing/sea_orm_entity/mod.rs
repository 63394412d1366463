pub mod profile_names;
pub mod users;
