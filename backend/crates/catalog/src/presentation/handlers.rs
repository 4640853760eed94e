//! HTTP Handlers
//!
//! Protected routes receive the authenticated identity as a
//! [`CurrentUser`] extension placed there by the auth gate middleware.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use auth::CurrentUser;
use kernel::id::{CardId, DeckId};

use crate::application::{
    AddCardToDeckUseCase, CreateCardUseCase, CreateDeckUseCase, DeleteCardUseCase,
    DeleteDeckUseCase, GetCardUseCase, GetDeckUseCase, ListCardsUseCase, ListMyDecksUseCase,
    ListPublicDecksUseCase, RemoveCardFromDeckUseCase, UpdateCardUseCase, UpdateDeckUseCase,
};
use crate::domain::repository::{
    CardFilter, CardRepository, DeckRepository, OwnerLookup,
};
use crate::domain::value_object::{CardType, Rarity};
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{
    AddCardRequest, CardDto, CardListQuery, CardResponse, CardsResponse, CreateCardRequest,
    CreateDeckRequest, DeckDto, DeckResponse, DecksResponse, MessageResponse, UpdateCardRequest,
    UpdateDeckRequest,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Cards
// ============================================================================

/// GET /api/cards
pub async fn list_cards<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<CardListQuery>,
) -> CatalogResult<Json<CardsResponse>>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let filter = parse_filter(query)?;

    let use_case = ListCardsUseCase::new(state.repo.clone(), state.repo.clone());
    let cards = use_case.execute(filter).await?;

    Ok(Json(CardsResponse {
        success: true,
        count: cards.len(),
        cards: cards.iter().map(CardDto::from).collect(),
    }))
}

fn parse_filter(query: CardListQuery) -> CatalogResult<CardFilter> {
    let mut violations = Vec::new();

    let rarity = match query.rarity.as_deref() {
        None => None,
        Some(code) => match Rarity::parse(code) {
            Some(rarity) => Some(rarity),
            None => {
                violations.push(format!("rarity '{code}' is not recognized"));
                None
            }
        },
    };

    let card_type = match query.card_type.as_deref() {
        None => None,
        Some(code) => match CardType::parse(code) {
            Some(card_type) => Some(card_type),
            None => {
                violations.push(format!("type '{code}' is not recognized"));
                None
            }
        },
    };

    if !violations.is_empty() {
        return Err(CatalogError::Validation(violations));
    }

    Ok(CardFilter {
        rarity,
        card_type,
        search: query.search,
    })
}

/// GET /api/cards/{id}
pub async fn get_card<R>(
    State(state): State<CatalogAppState<R>>,
    Path(card_id): Path<Uuid>,
) -> CatalogResult<Json<CardResponse>>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let use_case = GetCardUseCase::new(state.repo.clone(), state.repo.clone());
    let card = use_case.execute(CardId::from_uuid(card_id)).await?;

    Ok(Json(CardResponse {
        success: true,
        message: None,
        card: CardDto::from(&card),
    }))
}

/// POST /api/cards
pub async fn create_card<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<CreateCardRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let fields = req.into_new_card().map_err(CatalogError::Validation)?;

    let use_case = CreateCardUseCase::new(state.repo.clone(), state.repo.clone());
    let card = use_case.execute(fields, current.user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CardResponse {
            success: true,
            message: Some("Card created successfully".to_string()),
            card: CardDto::from(&card),
        }),
    ))
}

/// PUT /api/cards/{id}
pub async fn update_card<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(card_id): Path<Uuid>,
    Json(req): Json<UpdateCardRequest>,
) -> CatalogResult<Json<CardResponse>>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let patch = req.into_patch().map_err(CatalogError::Validation)?;

    let use_case = UpdateCardUseCase::new(state.repo.clone(), state.repo.clone());
    let card = use_case
        .execute(CardId::from_uuid(card_id), patch, current.user_id)
        .await?;

    Ok(Json(CardResponse {
        success: true,
        message: Some("Card updated successfully".to_string()),
        card: CardDto::from(&card),
    }))
}

/// DELETE /api/cards/{id}
pub async fn delete_card<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(card_id): Path<Uuid>,
) -> CatalogResult<Json<MessageResponse>>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let use_case = DeleteCardUseCase::new(state.repo.clone());
    use_case
        .execute(CardId::from_uuid(card_id), current.user_id)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Card deleted successfully".to_string(),
    }))
}

// ============================================================================
// Decks
// ============================================================================

/// GET /api/decks
pub async fn list_public_decks<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<DecksResponse>>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let use_case =
        ListPublicDecksUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());
    let decks = use_case.execute().await?;

    Ok(Json(DecksResponse {
        success: true,
        count: decks.len(),
        decks: decks.iter().map(DeckDto::from).collect(),
    }))
}

/// GET /api/decks/my-decks
pub async fn list_my_decks<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> CatalogResult<Json<DecksResponse>>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let use_case =
        ListMyDecksUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());
    let decks = use_case.execute(current.user_id).await?;

    Ok(Json(DecksResponse {
        success: true,
        count: decks.len(),
        decks: decks.iter().map(DeckDto::from).collect(),
    }))
}

/// GET /api/decks/{id}
pub async fn get_deck<R>(
    State(state): State<CatalogAppState<R>>,
    Path(deck_id): Path<Uuid>,
) -> CatalogResult<Json<DeckResponse>>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let use_case =
        GetDeckUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());
    let deck = use_case.execute(DeckId::from_uuid(deck_id)).await?;

    Ok(Json(DeckResponse {
        success: true,
        message: None,
        deck: DeckDto::from(&deck),
    }))
}

/// POST /api/decks
pub async fn create_deck<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<CreateDeckRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let use_case =
        CreateDeckUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());
    let deck = use_case.execute(req.into(), current.user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(DeckResponse {
            success: true,
            message: Some("Deck created successfully".to_string()),
            deck: DeckDto::from(&deck),
        }),
    ))
}

/// PUT /api/decks/{id}
pub async fn update_deck<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(deck_id): Path<Uuid>,
    Json(req): Json<UpdateDeckRequest>,
) -> CatalogResult<Json<DeckResponse>>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let use_case =
        UpdateDeckUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());
    let deck = use_case
        .execute(DeckId::from_uuid(deck_id), req.into(), current.user_id)
        .await?;

    Ok(Json(DeckResponse {
        success: true,
        message: Some("Deck updated successfully".to_string()),
        deck: DeckDto::from(&deck),
    }))
}

/// DELETE /api/decks/{id}
pub async fn delete_deck<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(deck_id): Path<Uuid>,
) -> CatalogResult<Json<MessageResponse>>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let use_case = DeleteDeckUseCase::new(state.repo.clone());
    use_case
        .execute(DeckId::from_uuid(deck_id), current.user_id)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Deck deleted successfully".to_string(),
    }))
}

/// POST /api/decks/{id}/cards
pub async fn add_card_to_deck<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(deck_id): Path<Uuid>,
    Json(req): Json<AddCardRequest>,
) -> CatalogResult<Json<DeckResponse>>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let use_case =
        AddCardToDeckUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());
    let deck = use_case
        .execute(
            DeckId::from_uuid(deck_id),
            CardId::from_uuid(req.card_id),
            req.quantity,
            current.user_id,
        )
        .await?;

    Ok(Json(DeckResponse {
        success: true,
        message: Some("Card added to deck".to_string()),
        deck: DeckDto::from(&deck),
    }))
}

/// DELETE /api/decks/{id}/cards/{card_id}
pub async fn remove_card_from_deck<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path((deck_id, card_id)): Path<(Uuid, Uuid)>,
) -> CatalogResult<Json<DeckResponse>>
where
    R: CardRepository + DeckRepository + OwnerLookup + Clone + Send + Sync + 'static,
{
    let use_case = RemoveCardFromDeckUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
    );
    let deck = use_case
        .execute(
            DeckId::from_uuid(deck_id),
            CardId::from_uuid(card_id),
            current.user_id,
        )
        .await?;

    Ok(Json(DeckResponse {
        success: true,
        message: Some("Card removed from deck".to_string()),
        deck: DeckDto::from(&deck),
    }))
}
