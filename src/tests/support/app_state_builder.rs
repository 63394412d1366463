use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    ChangeEmailUseCase, ChangePasswordUseCase, LoginUserUseCase, LogoutUserUseCase,
    RefreshTokenUseCase, RegisterUserUseCase,
};
use crate::profile::application::ports::incoming::use_cases::{
    ConfirmAvatarUseCase, DiscardAvatarUseCase, FetchProfileUseCase, UpdateProfileUseCase,
    UploadAvatarUseCase,
};
use crate::profile::application::ProfileUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as a stub that panics when called; tests swap in
/// the ones they exercise.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn RegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn LoginUserUseCase + Send + Sync>,
    refresh_token: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    logout_user: Arc<dyn LogoutUserUseCase + Send + Sync>,
    change_password: Arc<dyn ChangePasswordUseCase + Send + Sync>,
    change_email: Arc<dyn ChangeEmailUseCase + Send + Sync>,
    profile: ProfileUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            logout_user: Arc::new(StubLogoutUserUseCase),
            change_password: Arc::new(StubChangePasswordUseCase),
            change_email: Arc::new(StubChangeEmailUseCase),
            profile: ProfileUseCases {
                fetch: Arc::new(StubFetchProfileUseCase),
                update: Arc::new(StubUpdateProfileUseCase),
                upload_avatar: Arc::new(StubUploadAvatarUseCase),
                confirm_avatar: Arc::new(StubConfirmAvatarUseCase),
                discard_avatar: Arc::new(StubDiscardAvatarUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl RegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl RefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl LogoutUserUseCase + Send + Sync + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_change_password(
        mut self,
        uc: impl ChangePasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.change_password = Arc::new(uc);
        self
    }

    pub fn with_change_email(
        mut self,
        uc: impl ChangeEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.change_email = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.fetch = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.update = Arc::new(uc);
        self
    }

    pub fn with_upload_avatar(
        mut self,
        uc: impl UploadAvatarUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.upload_avatar = Arc::new(uc);
        self
    }

    pub fn with_confirm_avatar(
        mut self,
        uc: impl ConfirmAvatarUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.confirm_avatar = Arc::new(uc);
        self
    }

    pub fn with_discard_avatar(
        mut self,
        uc: impl DiscardAvatarUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.discard_avatar = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            refresh_token_use_case: self.refresh_token,
            logout_user_use_case: self.logout_user,
            change_password_use_case: self.change_password,
            change_email_use_case: self.change_email,
            profile: self.profile,
        })
    }
}
