use super::SessionStore;
use super::StoreError;
use ssk_core::ID;
use ssk_gameplay::Game;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process session store backed by a read-write locked map.
#[derive(Default)]
pub struct MemoryStore {
    games: RwLock<HashMap<ID<Game>, Game>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self, id: ID<Game>) -> Result<Game, StoreError> {
        self.games
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
    async fn save(&self, id: ID<Game>, game: &Game) -> Result<(), StoreError> {
        self.games.write().await.insert(id, game.clone());
        Ok(())
    }
    async fn delete(&self, id: ID<Game>) -> Result<(), StoreError> {
        self.games
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssk_board::Move;
    use ssk_board::Player;
    use ssk_board::Side;
    use ssk_core::Unique;
    use ssk_gameplay::Difficulty;
    use ssk_gameplay::Mode;

    #[tokio::test]
    async fn snapshots_round_trip() {
        let store = MemoryStore::new();
        let game = Game::create(Mode::Pvp, Difficulty::Easy, "Alice".into(), None)
            .assign_player2("Bob".into())
            .unwrap()
            .apply(Move::new(3, Side::Left, Player::One))
            .unwrap();
        store.save(game.id(), &game).await.unwrap();
        assert_eq!(store.load(game.id()).await.unwrap(), game);
    }

    #[tokio::test]
    async fn save_replaces_previous_snapshot() {
        let store = MemoryStore::new();
        let before = Game::create(Mode::Pvp, Difficulty::Easy, "Alice".into(), None);
        let after = before.assign_player2("Bob".into()).unwrap();
        store.save(before.id(), &before).await.unwrap();
        store.save(before.id(), &after).await.unwrap();
        assert_eq!(store.load(before.id()).await.unwrap(), after);
    }

    #[tokio::test]
    async fn unknown_sessions_are_not_found() {
        let store = MemoryStore::new();
        let id = ID::default();
        assert_eq!(store.load(id).await, Err(StoreError::NotFound));
        assert_eq!(store.delete(id).await, Err(StoreError::NotFound));
    }
}
