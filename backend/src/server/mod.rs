//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use user_directory::Trace;
#[cfg(debug_assertions)]
use user_directory::doc::ApiDoc;
use user_directory::domain::ports::UserDirectory;
use user_directory::inbound::http::error::unmatched_route;
use user_directory::inbound::http::health::{HealthState, live, ready};
use user_directory::inbound::http::state::HttpState;
use user_directory::inbound::http::users;
use user_directory::outbound::memory::InMemoryUserDirectory;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the directory the server starts with.
///
/// # Errors
/// Returns [`std::io::Error`] if the sample records fail to seed.
pub(crate) fn build_directory(settings: &ServerSettings) -> std::io::Result<Arc<dyn UserDirectory>> {
    if settings.seed_users() {
        let directory = InMemoryUserDirectory::seeded().map_err(std::io::Error::other)?;
        Ok(Arc::new(directory))
    } else {
        Ok(Arc::new(InMemoryUserDirectory::new()))
    }
}

pub(crate) fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(users::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(unmatched_route))
}

/// Construct an Actix HTTP server from the loaded settings.
///
/// The readiness flag is raised once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when the settings are invalid, seeding fails
/// or the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let http_state = web::Data::new(HttpState::new(build_directory(settings)?));
    let server_health_state = health_state.clone();

    let http_server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?;

    for addr in http_server.addrs() {
        info!(%addr, seeded = settings.seed_users(), "user directory listening");
    }

    let server = http_server.run();
    health_state.mark_ready();
    Ok(server)
}
