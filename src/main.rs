use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::Service as _;
use actix_web::{middleware::Logger, web, App, HttpServer};
use motorcare_backend::api::{openapi, routes, routes::AppState};
use motorcare_backend::application::{
    AppointmentService, AuthService, GarageService, VehicleService,
};
use motorcare_backend::config::AppConfig;
use motorcare_backend::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use motorcare_backend::infrastructure::repositories::{
    AppointmentRepositoryImpl, GarageRepositoryImpl, UserRepositoryImpl, VehicleRepositoryImpl,
};
use motorcare_backend::middleware::cors::cors_middleware;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("failed to load application configuration");

    let registry = tracing_subscriber::registry().with(EnvFilter::new(config.logging.level.clone()));
    if config.logging.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    } else {
        registry.with(fmt::layer()).init();
    }

    let pool = create_pool(&config.database)
        .await
        .expect("failed to create database pool");

    run_migrations(&pool)
        .await
        .expect("database migrations failed");

    let user_repo = Arc::new(UserRepositoryImpl::new(pool.clone()));
    let vehicle_repo = Arc::new(VehicleRepositoryImpl::new(pool.clone()));
    let garage_repo = Arc::new(GarageRepositoryImpl::new(pool.clone()));
    let appointment_repo = Arc::new(AppointmentRepositoryImpl::new(pool.clone()));

    let state = AppState {
        auth_service: Arc::new(AuthService::new(user_repo.clone(), config.auth.clone())),
        vehicle_service: Arc::new(VehicleService::new(vehicle_repo.clone())),
        garage_service: Arc::new(GarageService::new(garage_repo.clone())),
        appointment_service: Arc::new(AppointmentService::new(
            appointment_repo,
            vehicle_repo,
            garage_repo,
        )),
        db_pool: pool.clone(),
    };

    let bind_host = config.host.clone();
    let bind_port = config.port;
    let security_config = config.security.clone();
    let auth_config = config.auth.clone();

    info!(host = %bind_host, port = bind_port, environment = %config.environment, "starting server");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap_fn(|req, srv| {
                let request_id = Uuid::new_v4().to_string();
                let path = req.path().to_string();
                let method = req.method().to_string();
                let start = Instant::now();

                let fut = srv.call(req);
                async move {
                    match fut.await {
                        Ok(mut response) => {
                            response.headers_mut().insert(
                                actix_web::http::header::HeaderName::from_static("x-request-id"),
                                actix_web::http::header::HeaderValue::from_str(&request_id)
                                    .unwrap_or_else(|_| {
                                        actix_web::http::header::HeaderValue::from_static(
                                            "invalid-request-id",
                                        )
                                    }),
                            );

                            let status = response.status().as_u16();
                            let latency_ms = start.elapsed().as_millis() as u64;

                            info!(
                                request_id = %request_id,
                                method = %method,
                                path = %path,
                                status = status,
                                latency_ms = latency_ms,
                                "request completed"
                            );

                            Ok(response)
                        }
                        Err(error) => Err(error),
                    }
                }
            })
            .wrap(cors_middleware(&security_config))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(auth_config.clone()))
            .configure(routes::configure)
            .configure(openapi::configure_swagger_ui)
    })
    .bind((bind_host, bind_port))?
    .run()
    .await
}
