use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use creator_collab_backend::auth::middleware::JwtSecret;
use creator_collab_backend::config::AppConfig;
use creator_collab_backend::db::{self, Store};
use creator_collab_backend::handlers;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let db = db::connect(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;
    if config.run_migrations {
        db::run_migrations(&db)
            .await
            .map_err(std::io::Error::other)?;
        tracing::info!("Migrations applied");
    }
    if config.database_url.contains(":memory:") {
        tracing::warn!("Using an in-memory database; data is lost on restart");
    }

    let store = web::Data::new(Store::new(db));
    let jwt_secret = web::Data::new(JwtSecret(config.jwt_secret.clone()));
    let cors_max_age = config.cors_max_age.as_secs() as usize;

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(cors_max_age);

        App::new()
            .wrap(cors)
            .app_data(store.clone())
            .app_data(jwt_secret.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
