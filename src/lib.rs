pub mod ai;
pub mod auth {
    pub mod password;
    pub mod session;
}
pub mod config;
pub mod domain {
    pub mod booking;
    pub mod event;
    pub mod payment;
    pub mod user;
    pub mod vendor;
}
pub mod error;
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod admin;
        pub mod ai;
        pub mod auth;
        pub mod bookings;
        pub mod checkout;
        pub mod events;
        pub mod ops;
        pub mod payments;
        pub mod tasks;
        pub mod vendors;
        pub mod webhook;
    }
    pub mod middleware {
        pub mod auth;
    }
}
pub mod repo {
    pub mod bookings_repo;
    pub mod event_tasks_repo;
    pub mod events_repo;
    pub mod payments_repo;
    pub mod sessions_repo;
    pub mod stats_repo;
    pub mod users_repo;
    pub mod vendors_repo;
}
pub mod service {
    pub mod settlement;
    pub mod stripe_sync;
}

#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub users_repo: repo::users_repo::UsersRepo,
    pub vendors_repo: repo::vendors_repo::VendorsRepo,
    pub events_repo: repo::events_repo::EventsRepo,
    pub event_tasks_repo: repo::event_tasks_repo::EventTasksRepo,
    pub bookings_repo: repo::bookings_repo::BookingsRepo,
    pub payments_repo: repo::payments_repo::PaymentsRepo,
    pub sessions_repo: repo::sessions_repo::SessionsRepo,
    pub stats_repo: repo::stats_repo::StatsRepo,
    pub settlement: service::settlement::SettlementService,
    pub ai: ai::gemini::GeminiClient,
}
