pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::profile;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::HashingAlgorithm;
use crate::auth::adapter::outgoing::{
    RedisTokenRepository, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::ports::incoming::use_cases::{
    ChangeEmailUseCase, ChangePasswordUseCase, LoginUserUseCase, LogoutUserUseCase,
    RefreshTokenUseCase, RegisterUserUseCase,
};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::hash::PasswordHashingService;
use crate::auth::application::services::password::{
    PasswordPolicyConfig, PasswordPolicyEngine, StandardPasswordPolicy,
};
use crate::auth::application::services::{
    ChangeEmailService, ChangePasswordService, LoginUserService, LogoutUserService,
    RefreshTokenService, RegisterUserService,
};
use crate::profile::adapter::outgoing::{
    AvatarRepositoryPostgres, HtmlBioSanitizer, LocalAvatarStorage, ProfileRepositoryPostgres,
};
use crate::profile::application::domain::avatar_policy::AvatarPolicy;
use crate::profile::application::ports::outgoing::AvatarStorage;
use crate::profile::application::services::{
    ConfirmAvatarService, DiscardAvatarService, FetchProfileService, UpdateProfileService,
    UploadAvatarService,
};
use crate::profile::application::ProfileUseCases;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

/// Headroom over the avatar limit so the upload handler, not the payload
/// extractor, reports oversized images.
const PAYLOAD_SLACK_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn LogoutUserUseCase + Send + Sync>,
    pub change_password_use_case: Arc<dyn ChangePasswordUseCase + Send + Sync>,
    pub change_email_use_case: Arc<dyn ChangeEmailUseCase + Send + Sync>,
    pub profile: ProfileUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!(address = %server_url, environment = %env, "Server binding");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");
    let redis_arc = Arc::new(redis_pool);

    // Credentials
    let algorithm = HashingAlgorithm::from_env();
    info!(algorithm = ?algorithm, "Password hasher selected");
    let password_hasher = algorithm.build_hasher();
    let policy_config = PasswordPolicyConfig::from_env();
    let policy_engine = PasswordPolicyEngine::new(
        Arc::clone(&password_hasher),
        Arc::new(StandardPasswordPolicy::new(&policy_config)),
    );
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));

    let register_user_use_case = RegisterUserService::new(
        user_query.clone(),
        user_repo.clone(),
        policy_engine.clone(),
        Arc::clone(&token_provider),
    );
    let login_user_use_case = LoginUserService::new(
        user_query.clone(),
        PasswordHashingService::new(password_hasher),
        Arc::clone(&token_provider),
    );
    let refresh_token_use_case = RefreshTokenService::new(
        token_repo.clone(),
        user_query.clone(),
        Arc::clone(&token_provider),
    );
    let logout_user_use_case = LogoutUserService::new(token_repo, Arc::clone(&token_provider));
    let change_password_use_case = ChangePasswordService::new(
        user_query.clone(),
        user_repo.clone(),
        policy_engine,
        Arc::clone(&token_provider),
    );
    let change_email_use_case = ChangeEmailService::new(user_query.clone(), user_repo);

    // Profile and avatar
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let avatar_repo = AvatarRepositoryPostgres::new(Arc::clone(&db_arc));
    let avatar_storage: Arc<dyn AvatarStorage> = Arc::new(LocalAvatarStorage::from_env());
    let avatar_policy = AvatarPolicy::from_env();
    let payload_limit = avatar_policy.max_bytes + PAYLOAD_SLACK_BYTES;

    let profile = ProfileUseCases {
        fetch: Arc::new(FetchProfileService::new(
            user_query.clone(),
            profile_repo.clone(),
            avatar_repo.clone(),
        )),
        update: Arc::new(UpdateProfileService::new(
            user_query,
            profile_repo,
            avatar_repo.clone(),
            Arc::new(HtmlBioSanitizer::new()),
        )),
        upload_avatar: Arc::new(UploadAvatarService::new(
            avatar_repo.clone(),
            Arc::clone(&avatar_storage),
            avatar_policy,
        )),
        confirm_avatar: Arc::new(ConfirmAvatarService::new(
            avatar_repo.clone(),
            Arc::clone(&avatar_storage),
        )),
        discard_avatar: Arc::new(DiscardAvatarService::new(avatar_repo, avatar_storage)),
    };

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        change_password_use_case: Arc::new(change_password_use_case),
        change_email_use_case: Arc::new(change_email_use_case),
        profile,
    };

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(web::PayloadConfig::new(payload_limit))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    // Account
    cfg.service(crate::auth::adapter::incoming::web::routes::change_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_email_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::upload_avatar_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::confirm_avatar_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::discard_avatar_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
