use std::sync::Arc;

use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use eventlagbe_server::config::{Config, StoreBackend};
use eventlagbe_server::identity::{
    FirebaseIdentity, IdentityProvider, ServiceAccount, UnconfiguredIdentity,
};
use eventlagbe_server::routes::create_routes;
use eventlagbe_server::state::AppState;

fn identity_provider(config: &Config) -> Arc<dyn IdentityProvider> {
    let Some(path) = config.firebase_credentials.as_ref() else {
        tracing::warn!("FIREBASE_CREDENTIALS not set; account rejection will fail");
        return Arc::new(UnconfiguredIdentity);
    };

    match ServiceAccount::from_file(path) {
        Ok(account) => {
            let identity = FirebaseIdentity::new(account);
            tracing::info!(project = %identity.project_id(), "Firebase identity provider configured");
            Arc::new(identity)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Could not load Firebase credentials; account rejection will fail");
            Arc::new(UnconfiguredIdentity)
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env();
    let identity = identity_provider(&config);

    let state = match config.store_backend {
        StoreBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await
                .expect("Failed to connect to database");

            tracing::info!("Successfully connected to database");

            sqlx::migrate!()
                .run(&pool)
                .await
                .expect("Failed to run migrations");

            tracing::info!("Migrations run successfully");
            AppState::postgres(pool, identity)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            AppState::in_memory(identity)
        }
    };

    let app = create_routes(state);

    let addr = config.bind_addr();
    tracing::info!("Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
