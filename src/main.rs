use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use haven_core::application::{
    notifications::NotificationDispatcher,
    ports::{
        events::EventPublisher, mail::Mailer, security::AuthTokenVerifier, time::Clock,
    },
    services::ApplicationServices,
};
use haven_core::config::AppConfig;
use haven_core::domain::{
    article::ArticleReadRepository, comment::CommentRepository,
    notification::NotificationRepository, user::UserRepository,
};
use haven_core::infrastructure::{
    database,
    events::{EventQueue, run_dispatcher},
    mail::TracingMailer,
    repositories::{
        PostgresArticleReadRepository, PostgresCommentRepository,
        PostgresNotificationRepository, PostgresUserRepository,
    },
    security::HmacTokenVerifier,
    time::SystemClock,
};
use haven_core::presentation::http::{routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));
    let article_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let notification_repo: Arc<dyn NotificationRepository> =
        Arc::new(PostgresNotificationRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mailer: Arc<dyn Mailer> = Arc::new(TracingMailer);
    let token_verifier: Arc<dyn AuthTokenVerifier> = Arc::new(HmacTokenVerifier::new(
        config.auth_token_secret().as_bytes().to_vec(),
    ));

    // One bounded queue for the process lifetime: services publish into it,
    // a single worker drains it into the notification dispatcher.
    let (queue, receiver) = EventQueue::bounded(config.event_queue_capacity());
    let events: Arc<dyn EventPublisher> = Arc::new(queue);

    let dispatcher = Arc::new(NotificationDispatcher::new(
        Arc::clone(&user_repo),
        Arc::clone(&article_repo),
        Arc::clone(&notification_repo),
        Arc::clone(&mailer),
        Arc::clone(&clock),
    ));
    tokio::spawn(run_dispatcher(receiver, dispatcher));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&comment_repo),
        Arc::clone(&article_repo),
        Arc::clone(&user_repo),
        Arc::clone(&events),
        Arc::clone(&clock),
        Arc::clone(&token_verifier),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
