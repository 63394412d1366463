use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};

/// Revoked refresh tokens in Redis.
///
/// ```text
/// auth:blacklist:token:{token_hash} -> "{user_id}"   (TTL = token lifetime)
/// auth:blacklist:user:{user_id}     -> SET(token_hash)
/// ```
///
/// The per-token key is authoritative; Redis expiry does all cleanup.
#[derive(Clone)]
pub struct RedisTokenRepository {
    pool: Arc<Pool>,
}

impl RedisTokenRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:blacklist:token:{token_hash}")
    }

    fn user_key(user_id: Uuid) -> String {
        format!("auth:blacklist:user:{user_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    /// SET + EXPIRE on the token key and SADD + EXPIRE on the user index,
    /// in one MULTI/EXEC.
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Err(TokenRepositoryError::InvalidToken);
        }

        let token_key = Self::token_key(&token_hash);
        let user_key = Self::user_key(user_id);

        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&token_key)
            .arg(user_id.to_string())
            .ignore()
            .cmd("EXPIRE")
            .arg(&token_key)
            .arg(ttl)
            .ignore()
            .cmd("SADD")
            .arg(&user_key)
            .arg(&token_hash)
            .ignore()
            .cmd("EXPIRE")
            .arg(&user_key)
            .arg(ttl)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        let key = Self::token_key(token_hash);
        let mut conn = self.get_conn().await?;

        conn.exists(key)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))
    }

    /// Idempotent: a hash that is not blacklisted is a no-op.
    async fn remove_blacklisted_token(&self, token_hash: &str) -> Result<(), TokenRepositoryError> {
        let token_key = Self::token_key(token_hash);
        let mut conn = self.get_conn().await?;

        let owner: Option<String> = conn
            .get(&token_key)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        if let Some(uid) = owner {
            let user_id: Uuid = uid.parse().map_err(|_| TokenRepositoryError::InvalidToken)?;

            deadpool_redis::redis::pipe()
                .atomic()
                .del(&token_key)
                .ignore()
                .srem(Self::user_key(user_id), token_hash)
                .ignore()
                .query_async::<()>(&mut *conn)
                .await
                .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;
        }

        Ok(())
    }
}
