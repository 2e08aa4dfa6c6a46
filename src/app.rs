//! Router assembly and shared handler state.

use crate::auth::{api as auth_api, attach_identity, TokenService, UserStore};
use crate::db::SharedConnection;
use crate::kittens::{api as kitten_api, KittenStore};
use crate::middleware::request_logging;
use axum::{
    middleware,
    response::Html,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Dependencies handed to every route handler
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub kittens: KittenStore,
    pub tokens: Arc<TokenService>,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(conn: SharedConnection, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            users: UserStore::new(conn.clone()),
            kittens: KittenStore::new(conn),
            tokens: Arc::new(tokens),
            bcrypt_cost,
        }
    }
}

/// Build the full application router.
///
/// Every route sits behind [`attach_identity`]; protected handlers opt in by
/// taking an `Identity` argument.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/register", post(auth_api::register))
        .route("/login", post(auth_api::login))
        .route("/kittens", post(kitten_api::create_kitten))
        .route(
            "/kittens/:id",
            get(kitten_api::get_kitten).delete(kitten_api::delete_kitten),
        )
        .layer(middleware::from_fn_with_state(
            state.tokens.clone(),
            attach_identity,
        ))
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(
        r#"
      <h1>Welcome to Cyber Kittens!</h1>
      <p>Cats are available at <a href="/kittens/1">/kittens/:id</a></p>
      <p>Create a new cat at <b><code>POST /kittens</code></b> and delete one at <b><code>DELETE /kittens/:id</code></b></p>
      <p>Log in via POST /login or register via POST /register</p>
    "#,
    )
}

async fn health_check() -> &'static str {
    "ok"
}
