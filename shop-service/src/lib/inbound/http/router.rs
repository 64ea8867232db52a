use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_cart_item::add_cart_item;
use super::handlers::add_flower::add_flower;
use super::handlers::get_cart::get_cart;
use super::handlers::list_flowers::list_flowers;
use super::handlers::login::login;
use super::handlers::profile::profile;
use super::handlers::signup::signup;
use super::middleware::authenticate as auth_middleware;
use crate::domain::access::guard::AuthGuard;
use crate::domain::cart::service::CartService;
use crate::domain::flower::service::FlowerService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::InMemoryCartRepository;
use crate::outbound::repositories::InMemoryFlowerRepository;
use crate::outbound::repositories::InMemoryUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
    pub flower_service: Arc<FlowerService<InMemoryFlowerRepository>>,
    pub cart_service: Arc<CartService<InMemoryCartRepository, InMemoryFlowerRepository>>,
    pub auth_guard: Arc<AuthGuard<InMemoryUserRepository>>,
}

impl AppState {
    /// Wire the services over fresh, empty in-memory stores.
    ///
    /// The user store is shared between registration/login and the auth
    /// guard; the catalog is shared between the catalog and cart services.
    pub fn in_memory(token_service: Arc<TokenService>) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let flowers = Arc::new(InMemoryFlowerRepository::new());
        let cart = Arc::new(InMemoryCartRepository::new());
        let authenticator = Arc::new(Authenticator::new(Arc::clone(&token_service)));

        Self {
            user_service: Arc::new(UserService::new(Arc::clone(&users), authenticator)),
            flower_service: Arc::new(FlowerService::new(Arc::clone(&flowers))),
            cart_service: Arc::new(CartService::new(cart, flowers)),
            auth_guard: Arc::new(AuthGuard::new(token_service, users)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/flowers", get(list_flowers).post(add_flower));

    let protected_routes = Router::new()
        .route("/profile", get(profile))
        .route("/cart/items", get(get_cart).post(add_cart_item))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
