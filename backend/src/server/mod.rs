//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::students::{
    create_student, delete_student, get_all_students, get_student_by_name, update_student,
};
use crate::inbound::http::payload;
use crate::middleware::trace::Trace;
use crate::outbound::persistence::DieselStudentRepository;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api")
        .app_data(payload::json_config())
        .app_data(payload::path_config())
        .service(create_student)
        .service(get_all_students)
        .service(get_student_by_name)
        .service(update_student)
        .service(delete_student);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the configuration.
///
/// Readiness flips once the listener is bound, so orchestrators only route
/// traffic to a server that can accept it.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let repository = DieselStudentRepository::new(config.db_pool.clone());
    let http_state = web::Data::new(HttpState::new(Arc::new(repository)));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::persistence::{DbPool, PoolConfig};
    use actix_web::{http::StatusCode, test};

    // Pool construction is lazy: no connection is opened until checkout, so
    // wiring tests run without a database.
    async fn deps() -> AppDependencies {
        let pool = DbPool::new(PoolConfig::new("postgres://localhost/unreachable"))
            .await
            .expect("pool builds without connecting");
        let repository = DieselStudentRepository::new(pool);
        AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: web::Data::new(HttpState::new(Arc::new(repository))),
        }
    }

    #[actix_web::test]
    async fn wires_health_probes() {
        let deps = deps().await;
        deps.health_state.mark_ready();
        let app = test::init_service(build_app(deps)).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/health/live").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn responses_carry_the_trace_header() {
        let app = test::init_service(build_app(deps().await)).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/health/live").to_request())
                .await;
        assert!(res.headers().contains_key("trace-id"));
    }
}
