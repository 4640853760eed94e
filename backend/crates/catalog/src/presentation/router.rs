//! Catalog Routers
//!
//! Reads stay public; every mutation (and the caller-scoped deck
//! listing) sits behind the auth gate middleware.

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use auth::{AuthGateState, require_auth};
use auth::application::config::AuthConfig;
use auth::domain::repository::{
    CredentialRepository as AuthCredentialRepository, UserRepository as AuthUserRepository,
};

use crate::domain::repository::{CardRepository, DeckRepository, OwnerLookup};
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the cards router
pub fn cards_router<R, A>(repo: Arc<R>, auth_repo: Arc<A>, config: Arc<AuthConfig>) -> Router
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
    A: AuthUserRepository + AuthCredentialRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState { repo };
    let gate = AuthGateState {
        repo: auth_repo,
        config,
    };

    let public = Router::new()
        .route("/", get(handlers::list_cards::<R>))
        .route("/{id}", get(handlers::get_card::<R>));

    let protected = Router::new()
        .route("/", post(handlers::create_card::<R>))
        .route("/{id}", put(handlers::update_card::<R>))
        .route("/{id}", delete(handlers::delete_card::<R>))
        .route_layer(middleware::from_fn_with_state(gate, require_auth::<A>));

    public.merge(protected).with_state(state)
}

/// Create the decks router
pub fn decks_router<R, A>(repo: Arc<R>, auth_repo: Arc<A>, config: Arc<AuthConfig>) -> Router
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
    A: AuthUserRepository + AuthCredentialRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState { repo };
    let gate = AuthGateState {
        repo: auth_repo,
        config,
    };

    let public = Router::new()
        .route("/", get(handlers::list_public_decks::<R>))
        .route("/{id}", get(handlers::get_deck::<R>));

    let protected = Router::new()
        .route("/my-decks", get(handlers::list_my_decks::<R>))
        .route("/", post(handlers::create_deck::<R>))
        .route("/{id}", put(handlers::update_deck::<R>))
        .route("/{id}", delete(handlers::delete_deck::<R>))
        .route("/{id}/cards", post(handlers::add_card_to_deck::<R>))
        .route(
            "/{id}/cards/{card_id}",
            delete(handlers::remove_card_from_deck::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_auth::<A>));

    public.merge(protected).with_state(state)
}
