pub mod change_email_service;
pub mod change_password_service;
pub mod hash;
pub mod login_user_service;
pub mod logout_user_service;
pub mod password;
pub mod refresh_token_service;
pub mod register_user_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use change_email_service::ChangeEmailService;
pub use change_password_service::ChangePasswordService;
pub use login_user_service::LoginUserService;
pub use logout_user_service::LogoutUserService;
pub use refresh_token_service::RefreshTokenService;
pub use register_user_service::RegisterUserService;
