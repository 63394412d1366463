use async_trait::async_trait;

use crate::auth::application::domain::entities::{SessionUser, UserId};
use crate::auth::application::ports::incoming::use_cases::{
    ChangeEmailError, ChangeEmailRequest, ChangeEmailUseCase, ChangePasswordError,
    ChangePasswordRequest, ChangePasswordResponse, ChangePasswordUseCase, LoginError,
    LoginRequest, LoginUserResponse, LoginUserUseCase, LogoutError, LogoutRequest,
    LogoutResponse, LogoutUserUseCase, RefreshTokenError, RefreshTokenRequest,
    RefreshTokenResponse, RefreshTokenUseCase, RegisterUserError, RegisterUserRequest,
    RegisterUserResponse, RegisterUserUseCase, UserInfo,
};
use crate::profile::application::domain::entities::AvatarRecord;
use crate::profile::application::ports::incoming::use_cases::{
    ConfirmAvatarUseCase, DiscardAvatarUseCase, FetchProfileError, FetchProfileUseCase,
    PendingAvatarError, ProfileView, UpdateProfileError, UpdateProfileRequest,
    UpdateProfileUseCase, UploadAvatarError, UploadAvatarUseCase,
};

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl RefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUserUseCase;

#[async_trait]
impl LogoutUserUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubChangePasswordUseCase;

#[async_trait]
impl ChangePasswordUseCase for StubChangePasswordUseCase {
    async fn execute(
        &self,
        _session: SessionUser,
        _request: ChangePasswordRequest,
    ) -> Result<ChangePasswordResponse, ChangePasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubChangeEmailUseCase;

#[async_trait]
impl ChangeEmailUseCase for StubChangeEmailUseCase {
    async fn execute(
        &self,
        _session: SessionUser,
        _request: ChangeEmailRequest,
    ) -> Result<UserInfo, ChangeEmailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<ProfileView, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _request: UpdateProfileRequest,
    ) -> Result<ProfileView, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUploadAvatarUseCase;

#[async_trait]
impl UploadAvatarUseCase for StubUploadAvatarUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _content_type: String,
        _bytes: Vec<u8>,
    ) -> Result<AvatarRecord, UploadAvatarError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubConfirmAvatarUseCase;

#[async_trait]
impl ConfirmAvatarUseCase for StubConfirmAvatarUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<AvatarRecord, PendingAvatarError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDiscardAvatarUseCase;

#[async_trait]
impl DiscardAvatarUseCase for StubDiscardAvatarUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<AvatarRecord, PendingAvatarError> {
        unimplemented!("Not used in this test")
    }
}
