use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::Pool;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// Liveness check. No I/O.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn check_database(db: &DatabaseConnection) -> &'static str {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1");
    match db.execute(ping).await {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    }
}

async fn check_redis(pool: &Pool) -> &'static str {
    let Ok(mut conn) = pool.get().await else {
        return "unhealthy";
    };
    match deadpool_redis::redis::cmd("PING")
        .query_async::<String>(&mut *conn)
        .await
    {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    }
}

/// Readiness check: the database and the token store must both answer.
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Pool>>,
) -> impl Responder {
    let database = check_database(&db).await;
    let redis = check_redis(&redis).await;

    if database == "ok" && redis == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database,
            redis,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database,
            redis,
        })
    }
}
