use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use common::database;
use todo::{
    config::AppConfig,
    jwt::{JwtConfig, JwtService},
    repositories::{TodoRepository, UserRepository},
    routes,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting todo service");

    let app_config = AppConfig::from_env()?;

    // Initialize database connection pool
    let db_config = database::DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    // Check database connectivity
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Apply pending migrations
    sqlx::migrate!().run(&pool).await?;

    // Initialize the token service
    let jwt_config = JwtConfig::from_env()?;
    let jwt_service = JwtService::new(&jwt_config);

    // Initialize repositories
    let user_repository = UserRepository::new(pool.clone());
    let todo_repository = TodoRepository::new(pool.clone());

    let app_state = AppState {
        db_pool: pool,
        user_repository,
        todo_repository,
        jwt_service,
    };

    info!("Todo service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", app_config.port)).await?;
    info!("Todo service listening on 0.0.0.0:{}", app_config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
