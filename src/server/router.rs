//! Route table and OpenAPI document.

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::{
    controller::{event, order, product, project, root, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "IIEC API"),
    paths(
        root::index,
        user::register,
        user::login,
        user::verify,
        user::list_users,
        user::get_user,
        product::create_product,
        product::list_products,
        product::get_product,
        product::update_product,
        product::delete_product,
        project::create_project,
        project::list_projects,
        project::get_project,
        project::update_project,
        project::delete_project,
        project::create_section,
        project::list_project_sections,
        project::list_sections,
        project::get_section,
        project::update_section,
        project::delete_section,
        event::create_event,
        event::list_events,
        event::get_event,
        event::update_event,
        event::delete_event,
        order::create_order,
        order::list_orders,
        order::get_order,
        order::update_order,
        order::delete_order,
    ),
    modifiers(&BearerSecurity),
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by `/users/verify`.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::index))
        .route("/openapi.json", get(openapi_json))
        .route("/users", post(user::register).get(user::list_users))
        .route("/users/login", post(user::login))
        .route("/users/verify", get(user::verify))
        .route("/users/{id}", get(user::get_user))
        .route(
            "/products",
            post(product::create_product).get(product::list_products),
        )
        .route(
            "/products/{id}",
            get(product::get_product)
                .put(product::update_product)
                .patch(product::update_product)
                .delete(product::delete_product),
        )
        .route(
            "/projects",
            post(project::create_project).get(project::list_projects),
        )
        .route("/projects/sections", get(project::list_sections))
        .route(
            "/projects/sections/{section_id}",
            get(project::get_section)
                .put(project::update_section)
                .patch(project::update_section)
                .delete(project::delete_section),
        )
        .route(
            "/projects/{id}",
            get(project::get_project)
                .put(project::update_project)
                .patch(project::update_project)
                .delete(project::delete_project),
        )
        .route(
            "/projects/{id}/sections",
            post(project::create_section).get(project::list_project_sections),
        )
        .route("/events", post(event::create_event).get(event::list_events))
        .route(
            "/events/{id}",
            get(event::get_event)
                .put(event::update_event)
                .patch(event::update_event)
                .delete(event::delete_event),
        )
        .route("/orders", post(order::create_order).get(order::list_orders))
        .route(
            "/orders/{id}",
            get(order::get_order)
                .patch(order::update_order)
                .delete(order::delete_order),
        )
}
