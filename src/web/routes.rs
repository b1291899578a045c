// src/web/routes.rs
use crate::{
    state::AppState,
    web::{auth_handlers, machine_handlers, maintenance_handlers, report_handlers, user_handlers},
};
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Entidades ---
    let record_routes = Router::new()
        .route(
            "/machines",
            get(machine_handlers::list_machines).post(machine_handlers::create_machine),
        )
        .route(
            "/machines/{id}",
            put(machine_handlers::update_machine).delete(machine_handlers::delete_machine),
        )
        .route(
            "/maintenance-tasks",
            get(maintenance_handlers::list_tasks).post(maintenance_handlers::create_task),
        )
        .route(
            "/maintenance-schedules",
            get(maintenance_handlers::list_schedules).post(maintenance_handlers::create_schedule),
        )
        .route("/interventions", post(maintenance_handlers::create_intervention))
        .route(
            "/reports",
            get(report_handlers::list_reports).post(report_handlers::create_report),
        );

    // --- Contas e autenticação ---
    let account_routes = Router::new()
        .route("/users", post(user_handlers::create_user))
        .route("/users/login", post(auth_handlers::handle_username_login))
        .route("/login", post(auth_handlers::handle_email_login))
        .route("/signup", post(auth_handlers::handle_signup));

    let api = record_routes.merge(account_routes);

    // --- Router Final ---
    // Mesmas rotas na raiz e sob /api (o frontend usa /api/machines)
    Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .with_state(app_state)
}
