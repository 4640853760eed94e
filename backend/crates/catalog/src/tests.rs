//! Unit tests for the catalog crate
//!
//! Use cases run against an in-memory repository so the access rules
//! can be exercised without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use kernel::id::{CardId, DeckId, UserId};

use crate::application::{
    AddCardToDeckUseCase, CreateCardUseCase, CreateDeckUseCase, DeleteCardUseCase,
    GetDeckUseCase, ListCardsUseCase, ListMyDecksUseCase, ListPublicDecksUseCase,
    RemoveCardFromDeckUseCase, Resolver, UpdateCardUseCase, UpdateDeckUseCase,
};
use crate::domain::entity::{Card, CardPatch, Deck, DeckPatch, MAX_COPIES, NewCard, NewDeck};
use crate::domain::repository::{
    CardFilter, CardRepository, DeckRepository, OwnerLookup, OwnerSummary,
};
use crate::domain::value_object::{CardType, Rarity};
use crate::error::{CatalogError, CatalogResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemRepo {
    cards: Arc<Mutex<HashMap<CardId, Card>>>,
    decks: Arc<Mutex<HashMap<DeckId, Deck>>>,
    owners: Arc<Mutex<HashMap<UserId, String>>>,
    /// When set, every deck write loses the version race
    contended: Arc<AtomicBool>,
}

impl MemRepo {
    fn add_owner(&self, username: &str) -> UserId {
        let user_id = UserId::new();
        self.owners
            .lock()
            .unwrap()
            .insert(user_id, username.to_string());
        user_id
    }

    fn card(&self, card_id: &CardId) -> Option<Card> {
        self.cards.lock().unwrap().get(card_id).cloned()
    }

    fn deck(&self, deck_id: &DeckId) -> Option<Deck> {
        self.decks.lock().unwrap().get(deck_id).cloned()
    }
}

impl CardRepository for MemRepo {
    async fn create(&self, card: &Card) -> CatalogResult<()> {
        self.cards.lock().unwrap().insert(card.card_id, card.clone());
        Ok(())
    }

    async fn find_by_id(&self, card_id: &CardId) -> CatalogResult<Option<Card>> {
        Ok(self.card(card_id))
    }

    async fn find_by_ids(&self, card_ids: &[CardId]) -> CatalogResult<Vec<Card>> {
        let cards = self.cards.lock().unwrap();
        Ok(card_ids.iter().filter_map(|id| cards.get(id).cloned()).collect())
    }

    async fn update(&self, card: &Card) -> CatalogResult<()> {
        self.cards.lock().unwrap().insert(card.card_id, card.clone());
        Ok(())
    }

    async fn delete(&self, card_id: &CardId) -> CatalogResult<()> {
        self.cards.lock().unwrap().remove(card_id);
        Ok(())
    }

    async fn search(&self, filter: &CardFilter) -> CatalogResult<Vec<Card>> {
        let needle = filter.search.as_ref().map(|s| s.to_lowercase());
        let mut matches: Vec<Card> = self
            .cards
            .lock()
            .unwrap()
            .values()
            .filter(|card| {
                filter.rarity.is_none_or(|r| card.rarity == r)
                    && filter.card_type.is_none_or(|t| card.card_type == t)
                    && needle.as_ref().is_none_or(|n| {
                        card.name.to_lowercase().contains(n)
                            || card.description.to_lowercase().contains(n)
                    })
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }
}

impl DeckRepository for MemRepo {
    async fn create(&self, deck: &Deck) -> CatalogResult<()> {
        self.decks.lock().unwrap().insert(deck.deck_id, deck.clone());
        Ok(())
    }

    async fn find_by_id(&self, deck_id: &DeckId) -> CatalogResult<Option<Deck>> {
        Ok(self.deck(deck_id))
    }

    async fn update(&self, deck: &Deck) -> CatalogResult<bool> {
        if self.contended.load(Ordering::SeqCst) {
            return Ok(false);
        }

        let mut decks = self.decks.lock().unwrap();
        match decks.get(&deck.deck_id) {
            Some(stored) if stored.version == deck.version => {
                let mut next = deck.clone();
                next.version += 1;
                decks.insert(deck.deck_id, next);
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Ok(false),
        }
    }

    async fn delete(&self, deck_id: &DeckId) -> CatalogResult<()> {
        self.decks.lock().unwrap().remove(deck_id);
        Ok(())
    }

    async fn list_public(&self) -> CatalogResult<Vec<Deck>> {
        let mut decks: Vec<Deck> = self
            .decks
            .lock()
            .unwrap()
            .values()
            .filter(|d| d.is_public)
            .cloned()
            .collect();
        decks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(decks)
    }

    async fn list_by_owner(&self, owner: &UserId) -> CatalogResult<Vec<Deck>> {
        let mut decks: Vec<Deck> = self
            .decks
            .lock()
            .unwrap()
            .values()
            .filter(|d| d.owner == *owner)
            .cloned()
            .collect();
        decks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(decks)
    }
}

impl OwnerLookup for MemRepo {
    async fn find_owners(&self, user_ids: &[UserId]) -> CatalogResult<Vec<OwnerSummary>> {
        let owners = self.owners.lock().unwrap();
        Ok(user_ids
            .iter()
            .filter_map(|id| {
                owners.get(id).map(|username| OwnerSummary {
                    user_id: *id,
                    username: username.clone(),
                })
            })
            .collect())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn new_card_fields(name: &str) -> NewCard {
    NewCard {
        name: name.to_string(),
        description: format!("{name} description"),
        image: None,
        rarity: None,
        card_type: CardType::Creature,
        attack: Some(2),
        defense: Some(2),
        cost: 2,
        abilities: Vec::new(),
    }
}

async fn seed_card(repo: &MemRepo, name: &str, creator: UserId) -> CardId {
    let card = Card::new(new_card_fields(name), creator);
    let card_id = card.card_id;
    CardRepository::create(repo, &card).await.unwrap();
    card_id
}

async fn seed_deck(repo: &MemRepo, name: &str, owner: UserId, is_public: bool) -> DeckId {
    let deck = Deck::new(
        NewDeck {
            name: name.to_string(),
            description: None,
            is_public: Some(is_public),
        },
        owner,
    );
    let deck_id = deck.deck_id;
    DeckRepository::create(repo, &deck).await.unwrap();
    deck_id
}

fn repo() -> (Arc<MemRepo>, UserId) {
    let repo = Arc::new(MemRepo::default());
    let owner = repo.add_owner("alice");
    (repo, owner)
}

// ============================================================================
// Card ownership
// ============================================================================

mod card_ownership {
    use super::*;

    #[tokio::test]
    async fn update_by_stranger_is_forbidden_and_store_unchanged() {
        let (repo, owner) = repo();
        let stranger = repo.add_owner("mallory");
        let card_id = seed_card(&repo, "Flame Imp", owner).await;

        let use_case = UpdateCardUseCase::new(repo.clone(), repo.clone());
        let err = use_case
            .execute(
                card_id,
                CardPatch {
                    name: Some("Stolen".to_string()),
                    ..CardPatch::default()
                },
                stranger,
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::NotOwner {
                action: "update",
                resource: "card"
            }
        ));
        assert_eq!(repo.card(&card_id).unwrap().name, "Flame Imp");
    }

    #[tokio::test]
    async fn delete_by_stranger_is_forbidden_and_store_unchanged() {
        let (repo, owner) = repo();
        let stranger = repo.add_owner("mallory");
        let card_id = seed_card(&repo, "Flame Imp", owner).await;

        let use_case = DeleteCardUseCase::new(repo.clone());
        let err = use_case.execute(card_id, stranger).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::NotOwner {
                action: "delete",
                resource: "card"
            }
        ));
        assert!(repo.card(&card_id).is_some());
    }

    #[tokio::test]
    async fn owner_can_update_own_card() {
        let (repo, owner) = repo();
        let card_id = seed_card(&repo, "Flame Imp", owner).await;

        let use_case = UpdateCardUseCase::new(repo.clone(), repo.clone());
        let resolved = use_case
            .execute(
                card_id,
                CardPatch {
                    attack: Some(5),
                    ..CardPatch::default()
                },
                owner,
            )
            .await
            .unwrap();

        assert_eq!(resolved.card.attack, 5);
        assert_eq!(repo.card(&card_id).unwrap().attack, 5);
    }

    #[tokio::test]
    async fn update_missing_card_is_not_found() {
        let (repo, owner) = repo();

        let use_case = UpdateCardUseCase::new(repo.clone(), repo.clone());
        let err = use_case
            .execute(CardId::new(), CardPatch::default(), owner)
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::CardNotFound));
    }

    #[tokio::test]
    async fn creator_identity_comes_from_the_caller() {
        let (repo, owner) = repo();

        let use_case = CreateCardUseCase::new(repo.clone(), repo.clone());
        let resolved = use_case
            .execute(new_card_fields("Bolt"), owner)
            .await
            .unwrap();

        assert_eq!(resolved.card.created_by, owner);
        assert_eq!(resolved.created_by.unwrap().username, "alice");
    }

    #[tokio::test]
    async fn invalid_card_is_rejected_before_the_store() {
        let (repo, owner) = repo();

        let mut fields = new_card_fields("Bad");
        fields.name = String::new();
        fields.cost = -1;

        let use_case = CreateCardUseCase::new(repo.clone(), repo.clone());
        let err = use_case.execute(fields, owner).await.unwrap_err();

        match err {
            CatalogError::Validation(violations) => {
                assert_eq!(violations.len(), 2);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(repo.cards.lock().unwrap().is_empty());
    }
}

// ============================================================================
// Deck composition
// ============================================================================

mod deck_composition {
    use super::*;

    #[tokio::test]
    async fn add_card_merges_and_clamps_at_four() {
        let (repo, owner) = repo();
        let card_id = seed_card(&repo, "Bolt", owner).await;
        let deck_id = seed_deck(&repo, "Burn", owner, false).await;

        let use_case = AddCardToDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());

        use_case.execute(deck_id, card_id, 3, owner).await.unwrap();
        let resolved = use_case.execute(deck_id, card_id, 3, owner).await.unwrap();

        assert_eq!(resolved.deck.cards.len(), 1);
        assert_eq!(resolved.deck.cards[0].quantity, MAX_COPIES);
    }

    #[tokio::test]
    async fn first_insertion_is_clamped_too() {
        let (repo, owner) = repo();
        let card_id = seed_card(&repo, "Bolt", owner).await;
        let deck_id = seed_deck(&repo, "Burn", owner, false).await;

        let use_case = AddCardToDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let resolved = use_case.execute(deck_id, card_id, 40, owner).await.unwrap();

        assert_eq!(resolved.deck.cards[0].quantity, MAX_COPIES);
    }

    #[tokio::test]
    async fn repeated_maximal_quantities_still_land_on_the_clamp() {
        let (repo, owner) = repo();
        let card_id = seed_card(&repo, "Bolt", owner).await;
        let deck_id = seed_deck(&repo, "Burn", owner, false).await;

        let use_case = AddCardToDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());

        use_case
            .execute(deck_id, card_id, i16::MAX, owner)
            .await
            .unwrap();
        let resolved = use_case
            .execute(deck_id, card_id, i16::MAX, owner)
            .await
            .unwrap();

        assert_eq!(resolved.deck.cards[0].quantity, MAX_COPIES);
    }

    #[tokio::test]
    async fn add_unknown_card_is_not_found_and_deck_unchanged() {
        let (repo, owner) = repo();
        let deck_id = seed_deck(&repo, "Burn", owner, false).await;

        let use_case = AddCardToDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let err = use_case
            .execute(deck_id, CardId::new(), 1, owner)
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::CardNotFound));
        assert!(repo.deck(&deck_id).unwrap().cards.is_empty());
    }

    #[tokio::test]
    async fn add_with_zero_quantity_is_a_validation_failure() {
        let (repo, owner) = repo();
        let card_id = seed_card(&repo, "Bolt", owner).await;
        let deck_id = seed_deck(&repo, "Burn", owner, false).await;

        let use_case = AddCardToDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let err = use_case
            .execute(deck_id, card_id, 0, owner)
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[tokio::test]
    async fn stranger_cannot_modify_deck_composition() {
        let (repo, owner) = repo();
        let stranger = repo.add_owner("mallory");
        let card_id = seed_card(&repo, "Bolt", owner).await;
        let deck_id = seed_deck(&repo, "Burn", owner, false).await;

        let use_case = AddCardToDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let err = use_case
            .execute(deck_id, card_id, 1, stranger)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::NotOwner {
                action: "modify",
                resource: "deck"
            }
        ));
        assert!(repo.deck(&deck_id).unwrap().cards.is_empty());
    }

    #[tokio::test]
    async fn remove_card_is_idempotent() {
        let (repo, owner) = repo();
        let card_id = seed_card(&repo, "Bolt", owner).await;
        let deck_id = seed_deck(&repo, "Burn", owner, false).await;

        let add = AddCardToDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        add.execute(deck_id, card_id, 2, owner).await.unwrap();

        let remove = RemoveCardFromDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let first = remove.execute(deck_id, card_id, owner).await.unwrap();
        let second = remove.execute(deck_id, card_id, owner).await.unwrap();

        assert!(first.deck.cards.is_empty());
        assert!(second.deck.cards.is_empty());
    }

    #[tokio::test]
    async fn add_then_remove_restores_the_previous_composition() {
        let (repo, owner) = repo();
        let keep = seed_card(&repo, "Keep", owner).await;
        let transient = seed_card(&repo, "Transient", owner).await;
        let deck_id = seed_deck(&repo, "Burn", owner, false).await;

        let add = AddCardToDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        add.execute(deck_id, keep, 2, owner).await.unwrap();
        add.execute(deck_id, transient, 1, owner).await.unwrap();

        let remove = RemoveCardFromDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let resolved = remove.execute(deck_id, transient, owner).await.unwrap();

        assert_eq!(resolved.deck.cards.len(), 1);
        assert_eq!(resolved.deck.cards[0].card_id, keep);
        assert_eq!(resolved.deck.cards[0].quantity, 2);
    }

    #[tokio::test]
    async fn contended_deck_write_surfaces_a_conflict() {
        let (repo, owner) = repo();
        let card_id = seed_card(&repo, "Bolt", owner).await;
        let deck_id = seed_deck(&repo, "Burn", owner, false).await;

        repo.contended.store(true, Ordering::SeqCst);

        let use_case = AddCardToDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let err = use_case
            .execute(deck_id, card_id, 1, owner)
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::VersionConflict));
    }
}

// ============================================================================
// Deck visibility
// ============================================================================

mod deck_visibility {
    use super::*;

    #[tokio::test]
    async fn public_listing_excludes_private_decks() {
        let (repo, owner) = repo();
        seed_deck(&repo, "Public", owner, true).await;
        seed_deck(&repo, "Private", owner, false).await;

        let use_case =
            ListPublicDecksUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let decks = use_case.execute().await.unwrap();

        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].deck.name, "Public");
    }

    #[tokio::test]
    async fn my_decks_returns_private_ones_but_only_mine() {
        let (repo, owner) = repo();
        let other = repo.add_owner("bob");
        seed_deck(&repo, "Mine public", owner, true).await;
        seed_deck(&repo, "Mine private", owner, false).await;
        seed_deck(&repo, "Theirs", other, true).await;

        let use_case = ListMyDecksUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let decks = use_case.execute(owner).await.unwrap();

        assert_eq!(decks.len(), 2);
        assert!(decks.iter().all(|d| d.deck.owner == owner));
    }

    #[tokio::test]
    async fn direct_fetch_ignores_visibility() {
        let (repo, owner) = repo();
        let deck_id = seed_deck(&repo, "Private", owner, false).await;

        let use_case = GetDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let resolved = use_case.execute(deck_id).await.unwrap();

        assert!(!resolved.deck.is_public);
        assert_eq!(resolved.owner.unwrap().username, "alice");
    }

    #[tokio::test]
    async fn stranger_cannot_flip_deck_visibility() {
        let (repo, owner) = repo();
        let stranger = repo.add_owner("mallory");
        let deck_id = seed_deck(&repo, "Private", owner, false).await;

        let use_case = UpdateDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let err = use_case
            .execute(
                deck_id,
                DeckPatch {
                    is_public: Some(true),
                    ..DeckPatch::default()
                },
                stranger,
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::NotOwner {
                action: "update",
                resource: "deck"
            }
        ));
        assert!(!repo.deck(&deck_id).unwrap().is_public);
    }
}

// ============================================================================
// Card search
// ============================================================================

mod card_search {
    use super::*;

    async fn seed_catalog(repo: &MemRepo, owner: UserId) {
        let mut dragon = Card::new(
            NewCard {
                name: "Ancient Dragon".to_string(),
                description: "Breathes fire".to_string(),
                image: None,
                rarity: Some(Rarity::Legendary),
                card_type: CardType::Creature,
                attack: Some(8),
                defense: Some(8),
                cost: 9,
                abilities: vec!["flying".to_string()],
            },
            owner,
        );
        dragon.created_at = chrono::Utc::now() - chrono::Duration::minutes(2);

        let mut bolt = Card::new(
            NewCard {
                name: "Lightning Bolt".to_string(),
                description: "Deals three damage".to_string(),
                image: None,
                rarity: Some(Rarity::Common),
                card_type: CardType::Spell,
                attack: None,
                defense: None,
                cost: 1,
                abilities: Vec::new(),
            },
            owner,
        );
        bolt.created_at = chrono::Utc::now() - chrono::Duration::minutes(1);

        CardRepository::create(repo, &dragon).await.unwrap();
        CardRepository::create(repo, &bolt).await.unwrap();
    }

    #[tokio::test]
    async fn filters_are_anded() {
        let (repo, owner) = repo();
        seed_catalog(&repo, owner).await;

        let use_case = ListCardsUseCase::new(repo.clone(), repo.clone());
        let cards = use_case
            .execute(CardFilter {
                rarity: Some(Rarity::Legendary),
                card_type: Some(CardType::Creature),
                search: None,
            })
            .await
            .unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].card.name, "Ancient Dragon");
    }

    #[tokio::test]
    async fn search_is_case_insensitive_over_name_and_description() {
        let (repo, owner) = repo();
        seed_catalog(&repo, owner).await;

        let use_case = ListCardsUseCase::new(repo.clone(), repo.clone());

        let by_name = use_case
            .execute(CardFilter {
                search: Some("DRAGON".to_string()),
                ..CardFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(by_name.len(), 1);

        let by_description = use_case
            .execute(CardFilter {
                search: Some("three damage".to_string()),
                ..CardFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].card.name, "Lightning Bolt");
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let (repo, owner) = repo();
        seed_catalog(&repo, owner).await;

        let use_case = ListCardsUseCase::new(repo.clone(), repo.clone());
        let cards = use_case.execute(CardFilter::default()).await.unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].card.name, "Lightning Bolt");
        assert_eq!(cards[1].card.name, "Ancient Dragon");
    }
}

// ============================================================================
// Resolver
// ============================================================================

mod resolver {
    use super::*;

    #[tokio::test]
    async fn dangling_card_reference_resolves_to_null_entry() {
        let (repo, owner) = repo();
        let card_id = seed_card(&repo, "Vanishing", owner).await;
        let deck_id = seed_deck(&repo, "Burn", owner, false).await;

        let add = AddCardToDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        add.execute(deck_id, card_id, 1, owner).await.unwrap();

        // Card deleted out from under the deck
        CardRepository::delete(repo.as_ref(), &card_id).await.unwrap();

        let use_case = GetDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let resolved = use_case.execute(deck_id).await.unwrap();

        assert_eq!(resolved.entries.len(), 1);
        assert!(resolved.entries[0].card.is_none());
        assert_eq!(resolved.entries[0].quantity, 1);
    }

    #[tokio::test]
    async fn dangling_owner_resolves_to_none() {
        let repo = Arc::new(MemRepo::default());
        // Owner never registered in the lookup
        let ghost = UserId::new();
        let deck_id = seed_deck(&repo, "Orphan", ghost, true).await;

        let use_case = GetDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let resolved = use_case.execute(deck_id).await.unwrap();

        assert!(resolved.owner.is_none());
    }

    #[tokio::test]
    async fn batch_resolution_covers_every_input_deck() {
        let (repo, owner) = repo();
        let card_id = seed_card(&repo, "Shared", owner).await;

        let add = AddCardToDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        for name in ["One", "Two", "Three"] {
            let deck_id = seed_deck(&repo, name, owner, true).await;
            add.execute(deck_id, card_id, 1, owner).await.unwrap();
        }

        let resolver = Resolver::new(repo.clone(), repo.clone());
        let decks = DeckRepository::list_public(repo.as_ref()).await.unwrap();
        let resolved = resolver.resolve_decks(decks).await.unwrap();

        assert_eq!(resolved.len(), 3);
        for deck in &resolved {
            assert_eq!(deck.owner.as_ref().unwrap().username, "alice");
            assert!(deck.entries[0].card.is_some());
        }
    }
}

// ============================================================================
// Deck creation
// ============================================================================

mod deck_creation {
    use super::*;

    #[tokio::test]
    async fn new_deck_is_private_and_empty_by_default() {
        let (repo, owner) = repo();

        let use_case = CreateDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let resolved = use_case
            .execute(
                NewDeck {
                    name: "Fresh".to_string(),
                    description: None,
                    is_public: None,
                },
                owner,
            )
            .await
            .unwrap();

        assert!(!resolved.deck.is_public);
        assert!(resolved.deck.cards.is_empty());
        assert_eq!(resolved.deck.likes, 0);
        assert_eq!(resolved.deck.owner, owner);
    }

    #[tokio::test]
    async fn nameless_deck_is_rejected() {
        let (repo, owner) = repo();

        let use_case = CreateDeckUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let err = use_case
            .execute(
                NewDeck {
                    name: "  ".to_string(),
                    description: None,
                    is_public: None,
                },
                owner,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(repo.decks.lock().unwrap().is_empty());
    }
}
