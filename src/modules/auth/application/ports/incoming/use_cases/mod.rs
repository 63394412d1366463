mod change_email;
mod change_password;
mod login_user;
mod logout_user;
mod refresh_token;
mod register_user;

pub use change_email::{
    ChangeEmailError, ChangeEmailRequest, ChangeEmailRequestError, ChangeEmailUseCase,
};
pub use change_password::{
    ChangePasswordError, ChangePasswordRequest, ChangePasswordResponse, ChangePasswordUseCase,
};
pub use login_user::{
    AuthTokens, LoginError, LoginRequest, LoginRequestError, LoginUserResponse, LoginUserUseCase,
    UserInfo,
};
pub use logout_user::{LogoutError, LogoutRequest, LogoutResponse, LogoutUserUseCase};
pub use refresh_token::{
    RefreshTokenError, RefreshTokenRequest, RefreshTokenRequestError, RefreshTokenResponse,
    RefreshTokenUseCase,
};
pub use register_user::{
    RegisterRequestError, RegisterUserError, RegisterUserRequest, RegisterUserResponse,
    RegisterUserUseCase,
};
