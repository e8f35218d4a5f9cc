use axum::middleware::from_fn_with_state;
use axum::routing::{get, patch, post};
use axum::Router;
use eventmate::ai::gemini::GeminiClient;
use eventmate::config::AppConfig;
use eventmate::domain::user::UserRole;
use eventmate::gateways::stripe::StripeGateway;
use eventmate::gateways::CheckoutProvider;
use eventmate::http::handlers::{
    admin, ai, auth, bookings, checkout, events, ops, payments, tasks, vendors, webhook,
};
use eventmate::http::middleware::auth::{require_role, require_session, RoleGate};
use eventmate::repo::bookings_repo::BookingsRepo;
use eventmate::repo::event_tasks_repo::EventTasksRepo;
use eventmate::repo::events_repo::EventsRepo;
use eventmate::repo::payments_repo::PaymentsRepo;
use eventmate::repo::sessions_repo::SessionsRepo;
use eventmate::repo::stats_repo::StatsRepo;
use eventmate::repo::users_repo::UsersRepo;
use eventmate::repo::vendors_repo::VendorsRepo;
use eventmate::service::settlement::SettlementService;
use eventmate::service::stripe_sync::StripeSyncTask;
use eventmate::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let users_repo = UsersRepo { pool: pool.clone() };
    let vendors_repo = VendorsRepo { pool: pool.clone() };
    let events_repo = EventsRepo { pool: pool.clone() };
    let event_tasks_repo = EventTasksRepo { pool: pool.clone() };
    let bookings_repo = BookingsRepo { pool: pool.clone() };
    let payments_repo = PaymentsRepo { pool: pool.clone() };
    let sessions_repo = SessionsRepo { pool: pool.clone() };
    let stats_repo = StatsRepo { pool: pool.clone() };

    let provider: Arc<dyn CheckoutProvider> = Arc::new(StripeGateway {
        base_url: cfg.stripe_base_url.clone(),
        secret_key: cfg.stripe_secret_key.clone(),
        timeout_ms: cfg.gateway_timeout_ms,
        client: reqwest::Client::new(),
    });

    let settlement = SettlementService {
        pool: pool.clone(),
        bookings_repo: bookings_repo.clone(),
        payments_repo: payments_repo.clone(),
        events_repo: events_repo.clone(),
        vendors_repo: vendors_repo.clone(),
        provider,
        app_url: cfg.app_url.clone(),
    };

    let ai_client = GeminiClient {
        base_url: cfg.gemini_base_url.clone(),
        api_key: cfg.gemini_api_key.clone(),
        timeout_ms: cfg.gateway_timeout_ms,
        client: reqwest::Client::new(),
    };

    let state = AppState {
        config: cfg.clone(),
        users_repo,
        vendors_repo,
        events_repo,
        event_tasks_repo,
        bookings_repo,
        payments_repo: payments_repo.clone(),
        sessions_repo: sessions_repo.clone(),
        stats_repo,
        settlement: settlement.clone(),
        ai: ai_client,
    };

    let sync = StripeSyncTask {
        settlement,
        payments_repo,
        sessions_repo,
    };
    tokio::spawn(sync.run());

    let admin_routes = Router::new()
        .route("/api/admin/create", post(auth::admin_create))
        .route("/api/admin/stats", get(admin::stats))
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/events", get(admin::list_events))
        .route("/api/admin/bookings", get(admin::list_bookings))
        .route("/api/admin/users/:id/role", patch(admin::update_user_role))
        .route("/api/admin/vendors/:id/verify", patch(admin::verify_vendor))
        .layer(from_fn_with_state(RoleGate { role: UserRole::Admin }, require_role))
        .layer(from_fn_with_state(state.clone(), require_session));

    let user_routes = Router::new()
        .route("/api/auth/user", get(auth::current_user))
        .route("/api/events", get(events::list_events).post(events::create_event))
        .route(
            "/api/events/:id",
            get(events::get_event)
                .patch(events::update_event)
                .delete(events::delete_event),
        )
        .route(
            "/api/events/:id/tasks",
            get(tasks::list_event_tasks).post(tasks::create_task),
        )
        .route("/api/tasks", get(tasks::list_user_tasks))
        .route("/api/tasks/:id", patch(tasks::update_task).delete(tasks::delete_task))
        .route("/api/events/:id/bookings", get(bookings::list_event_bookings))
        .route("/api/vendor/profile", get(vendors::get_profile).patch(vendors::update_profile))
        .route("/api/vendor/setup", post(vendors::setup_profile))
        .route("/api/vendor/bookings", get(bookings::list_vendor_bookings))
        .route(
            "/api/bookings",
            get(bookings::list_user_bookings).post(bookings::create_booking),
        )
        .route("/api/bookings/:id", patch(bookings::update_booking))
        .route(
            "/api/payments",
            get(payments::list_payments).post(payments::create_payment),
        )
        .route("/api/user/payments", get(payments::list_payments_with_details))
        .route("/api/ai/recommendations", post(ai::recommendations))
        .route("/api/ai/vendor-suggestions", post(ai::vendor_suggestions))
        .route("/api/checkout/booking", post(checkout::checkout_booking))
        .route("/api/checkout/verify", post(checkout::verify_payment))
        .layer(from_fn_with_state(state.clone(), require_session));

    let app = Router::new()
        .route("/health", get(ops::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/vendor/register", post(auth::vendor_register))
        .route("/api/auth/vendor/login", post(auth::vendor_login))
        .route("/api/auth/admin/login", post(auth::admin_login))
        .route("/api/vendors", get(vendors::list_vendors))
        .route("/api/vendors/:id", get(vendors::get_vendor))
        .route("/api/stripe/publishable-key", get(ops::stripe_publishable_key))
        .route("/api/stripe/webhook/:uuid", post(webhook::stripe_webhook))
        .merge(user_routes)
        .merge(admin_routes)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
