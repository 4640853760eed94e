//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use kernel::id::{CardId, DeckId, UserId};

use crate::domain::entity::{Card, Deck, DeckEntry};
use crate::domain::repository::{
    CardFilter, CardRepository, DeckRepository, OwnerLookup, OwnerSummary,
};
use crate::domain::value_object::{CardType, Rarity};
use crate::error::CatalogResult;

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

/// Escape LIKE/ILIKE metacharacters so a search term matches literally
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_entries(
        &self,
        deck_ids: &[Uuid],
    ) -> CatalogResult<HashMap<Uuid, Vec<DeckEntry>>> {
        let rows = sqlx::query_as::<_, DeckCardRow>(
            r#"
            SELECT deck_id, card_id, quantity
            FROM deck_cards
            WHERE deck_id = ANY($1)
            ORDER BY deck_id, position
            "#,
        )
        .bind(deck_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut entries: HashMap<Uuid, Vec<DeckEntry>> = HashMap::new();
        for row in rows {
            entries.entry(row.deck_id).or_default().push(DeckEntry {
                card_id: CardId::from_uuid(row.card_id),
                quantity: row.quantity,
            });
        }

        Ok(entries)
    }
}

// ============================================================================
// Row mappings
// ============================================================================

#[derive(sqlx::FromRow)]
struct CardRow {
    card_id: Uuid,
    name: String,
    description: String,
    image: String,
    rarity: String,
    card_type: String,
    attack: i32,
    defense: i32,
    cost: i32,
    abilities: Vec<String>,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CardRow {
    fn into_card(self) -> Card {
        Card {
            card_id: CardId::from_uuid(self.card_id),
            name: self.name,
            description: self.description,
            image: self.image,
            // Stored codes passed enum validation on the way in
            rarity: Rarity::from_code(&self.rarity),
            card_type: CardType::from_code(&self.card_type),
            attack: self.attack,
            defense: self.defense,
            cost: self.cost,
            abilities: self.abilities,
            created_by: UserId::from_uuid(self.created_by),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const CARD_COLUMNS: &str = r#"
    card_id,
    name,
    description,
    image,
    rarity,
    card_type,
    attack,
    defense,
    cost,
    abilities,
    created_by,
    created_at,
    updated_at
"#;

#[derive(sqlx::FromRow)]
struct DeckRow {
    deck_id: Uuid,
    name: String,
    description: String,
    owner: Uuid,
    is_public: bool,
    likes: i64,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DeckRow {
    fn into_deck(self, cards: Vec<DeckEntry>) -> Deck {
        Deck {
            deck_id: DeckId::from_uuid(self.deck_id),
            name: self.name,
            description: self.description,
            cards,
            owner: UserId::from_uuid(self.owner),
            is_public: self.is_public,
            likes: self.likes,
            version: self.version,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const DECK_COLUMNS: &str = r#"
    deck_id,
    name,
    description,
    owner,
    is_public,
    likes,
    version,
    created_at,
    updated_at
"#;

#[derive(sqlx::FromRow)]
struct DeckCardRow {
    deck_id: Uuid,
    card_id: Uuid,
    quantity: i16,
}

// ============================================================================
// Card Repository Implementation
// ============================================================================

impl CardRepository for PgCatalogRepository {
    async fn create(&self, card: &Card) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO cards (
                card_id,
                name,
                description,
                image,
                rarity,
                card_type,
                attack,
                defense,
                cost,
                abilities,
                created_by,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(card.card_id.as_uuid())
        .bind(&card.name)
        .bind(&card.description)
        .bind(&card.image)
        .bind(card.rarity.code())
        .bind(card.card_type.code())
        .bind(card.attack)
        .bind(card.defense)
        .bind(card.cost)
        .bind(&card.abilities)
        .bind(card.created_by.as_uuid())
        .bind(card.created_at)
        .bind(card.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, card_id: &CardId) -> CatalogResult<Option<Card>> {
        let row = sqlx::query_as::<_, CardRow>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE card_id = $1"
        ))
        .bind(card_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CardRow::into_card))
    }

    async fn find_by_ids(&self, card_ids: &[CardId]) -> CatalogResult<Vec<Card>> {
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = card_ids.iter().map(|id| *id.as_uuid()).collect();

        let rows = sqlx::query_as::<_, CardRow>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE card_id = ANY($1)"
        ))
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CardRow::into_card).collect())
    }

    async fn update(&self, card: &Card) -> CatalogResult<()> {
        sqlx::query(
            r#"
            UPDATE cards
            SET name = $2,
                description = $3,
                image = $4,
                rarity = $5,
                card_type = $6,
                attack = $7,
                defense = $8,
                cost = $9,
                abilities = $10,
                updated_at = $11
            WHERE card_id = $1
            "#,
        )
        .bind(card.card_id.as_uuid())
        .bind(&card.name)
        .bind(&card.description)
        .bind(&card.image)
        .bind(card.rarity.code())
        .bind(card.card_type.code())
        .bind(card.attack)
        .bind(card.defense)
        .bind(card.cost)
        .bind(&card.abilities)
        .bind(card.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, card_id: &CardId) -> CatalogResult<()> {
        sqlx::query("DELETE FROM cards WHERE card_id = $1")
            .bind(card_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn search(&self, filter: &CardFilter) -> CatalogResult<Vec<Card>> {
        // NULL parameters disable their condition; conditions are ANDed
        let pattern = filter
            .search
            .as_ref()
            .map(|s| format!("%{}%", escape_like(s)));

        let rows = sqlx::query_as::<_, CardRow>(&format!(
            r#"
            SELECT {CARD_COLUMNS}
            FROM cards
            WHERE ($1::text IS NULL OR rarity = $1)
              AND ($2::text IS NULL OR card_type = $2)
              AND ($3::text IS NULL OR name ILIKE $3 OR description ILIKE $3)
            ORDER BY created_at DESC
            "#
        ))
        .bind(filter.rarity.map(|r| r.code()))
        .bind(filter.card_type.map(|t| t.code()))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CardRow::into_card).collect())
    }
}

// ============================================================================
// Deck Repository Implementation
// ============================================================================

impl DeckRepository for PgCatalogRepository {
    async fn create(&self, deck: &Deck) -> CatalogResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO decks (
                deck_id,
                name,
                description,
                owner,
                is_public,
                likes,
                version,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(deck.deck_id.as_uuid())
        .bind(&deck.name)
        .bind(&deck.description)
        .bind(deck.owner.as_uuid())
        .bind(deck.is_public)
        .bind(deck.likes)
        .bind(deck.version)
        .bind(deck.created_at)
        .bind(deck.updated_at)
        .execute(&mut *tx)
        .await?;

        for (position, entry) in deck.cards.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO deck_cards (deck_id, card_id, quantity, position)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(deck.deck_id.as_uuid())
            .bind(entry.card_id.as_uuid())
            .bind(entry.quantity)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, deck_id: &DeckId) -> CatalogResult<Option<Deck>> {
        let row = sqlx::query_as::<_, DeckRow>(&format!(
            "SELECT {DECK_COLUMNS} FROM decks WHERE deck_id = $1"
        ))
        .bind(deck_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut entries = self.load_entries(&[row.deck_id]).await?;
        let cards = entries.remove(&row.deck_id).unwrap_or_default();

        Ok(Some(row.into_deck(cards)))
    }

    async fn update(&self, deck: &Deck) -> CatalogResult<bool> {
        let mut tx = self.pool.begin().await?;

        // Compare-and-increment on the version column; zero rows means
        // a concurrent writer committed since our read.
        let updated = sqlx::query(
            r#"
            UPDATE decks
            SET name = $2,
                description = $3,
                is_public = $4,
                likes = $5,
                version = version + 1,
                updated_at = $6
            WHERE deck_id = $1 AND version = $7
            "#,
        )
        .bind(deck.deck_id.as_uuid())
        .bind(&deck.name)
        .bind(&deck.description)
        .bind(deck.is_public)
        .bind(deck.likes)
        .bind(deck.updated_at)
        .bind(deck.version)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM deck_cards WHERE deck_id = $1")
            .bind(deck.deck_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        for (position, entry) in deck.cards.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO deck_cards (deck_id, card_id, quantity, position)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(deck.deck_id.as_uuid())
            .bind(entry.card_id.as_uuid())
            .bind(entry.quantity)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(true)
    }

    async fn delete(&self, deck_id: &DeckId) -> CatalogResult<()> {
        // deck_cards rows go with the deck via ON DELETE CASCADE
        sqlx::query("DELETE FROM decks WHERE deck_id = $1")
            .bind(deck_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_public(&self) -> CatalogResult<Vec<Deck>> {
        let rows = sqlx::query_as::<_, DeckRow>(&format!(
            "SELECT {DECK_COLUMNS} FROM decks WHERE is_public ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        self.assemble(rows).await
    }

    async fn list_by_owner(&self, owner: &UserId) -> CatalogResult<Vec<Deck>> {
        let rows = sqlx::query_as::<_, DeckRow>(&format!(
            "SELECT {DECK_COLUMNS} FROM decks WHERE owner = $1 ORDER BY created_at DESC"
        ))
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        self.assemble(rows).await
    }
}

impl PgCatalogRepository {
    async fn assemble(&self, rows: Vec<DeckRow>) -> CatalogResult<Vec<Deck>> {
        let deck_ids: Vec<Uuid> = rows.iter().map(|r| r.deck_id).collect();
        let mut entries = self.load_entries(&deck_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let cards = entries.remove(&row.deck_id).unwrap_or_default();
                row.into_deck(cards)
            })
            .collect())
    }
}

// ============================================================================
// Owner Lookup Implementation
// ============================================================================

impl OwnerLookup for PgCatalogRepository {
    async fn find_owners(&self, user_ids: &[UserId]) -> CatalogResult<Vec<OwnerSummary>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = user_ids.iter().map(|id| *id.as_uuid()).collect();

        let rows: Vec<(Uuid, String)> =
            sqlx::query_as("SELECT user_id, username FROM users WHERE user_id = ANY($1)")
                .bind(&uuids)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(user_id, username)| OwnerSummary {
                user_id: UserId::from_uuid(user_id),
                username,
            })
            .collect())
    }
}
