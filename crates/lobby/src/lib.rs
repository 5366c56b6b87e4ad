//! Session registry and entry points.
//!
//! The [`Lobby`] manages live rooms and exposes the thin creation/query
//! surface the transport layer calls into: create a session, snapshot it,
//! join/rejoin a connection, submit a move, trigger a fallback bot turn,
//! close. Each room sits behind its own lock, so moves within one session
//! serialize while sessions proceed fully in parallel.
use ssk_board::Move;
use ssk_board::Player;
use ssk_core::ID;
use ssk_gameplay::Difficulty;
use ssk_gameplay::Game;
use ssk_gameplay::Mode;
use ssk_gameroom::Event;
use ssk_gameroom::Identity;
use ssk_gameroom::Room;
use ssk_store::SessionStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::unbounded_channel;

/// Manages active sessions and their lifecycles.
///
/// The store is the durable source of truth: sessions are written on every
/// transition and a session missing from the registry is resurrected from
/// its last stored snapshot, which is what lets clients reconnect across a
/// registry restart.
pub struct Lobby {
    store: Arc<dyn SessionStore>,
    rooms: RwLock<HashMap<ID<Game>, Arc<Mutex<Room>>>>,
}

impl Lobby {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            rooms: RwLock::new(HashMap::new()),
        }
    }

    /// Opens a new session and returns its id.
    pub async fn create(
        &self,
        mode: Mode,
        difficulty: Difficulty,
        player1_name: String,
        player2_name: Option<String>,
    ) -> anyhow::Result<ID<Game>> {
        let game = Game::create(mode, difficulty, player1_name, player2_name);
        let id = ssk_core::Unique::id(&game);
        self.store.save(id, &game).await?;
        let room = Arc::new(Mutex::new(Room::new(game, self.store.clone())));
        self.rooms.write().await.insert(id, room);
        log::info!("[lobby] created {} session {}", mode, id);
        Ok(id)
    }

    /// Current snapshot of a session.
    pub async fn game(&self, id: ID<Game>) -> anyhow::Result<Game> {
        let room = self.room(id).await?;
        let room = room.lock().await;
        Ok(room.game().clone())
    }

    /// Binds an identity to a slot and returns its assignment together with
    /// the connection's event stream.
    pub async fn join(
        &self,
        id: ID<Game>,
        identity: Identity,
        name: String,
        as_creator: bool,
    ) -> anyhow::Result<(Player, UnboundedReceiver<Event>)> {
        let room = self.room(id).await?;
        let (tx, rx) = unbounded_channel();
        let player = room.lock().await.join(identity, name, as_creator, tx).await?;
        Ok((player, rx))
    }

    /// Re-seats a previously-bound identity after a disconnect.
    pub async fn rejoin(
        &self,
        id: ID<Game>,
        identity: Identity,
    ) -> anyhow::Result<(Player, UnboundedReceiver<Event>)> {
        let room = self.room(id).await?;
        let (tx, rx) = unbounded_channel();
        let player = room.lock().await.rejoin(&identity, tx)?;
        Ok((player, rx))
    }

    /// Submits one move. The returned snapshot reflects the move and, in
    /// pva sessions, the bot's immediate reply.
    pub async fn submit(
        &self,
        id: ID<Game>,
        identity: Identity,
        mv: Move,
    ) -> anyhow::Result<Game> {
        let room = self.room(id).await?;
        let game = room.lock().await.submit(&identity, mv).await?;
        Ok(game)
    }

    /// Fallback trigger for one bot turn outside the normal move path.
    pub async fn ai_move(&self, id: ID<Game>) -> anyhow::Result<Game> {
        let room = self.room(id).await?;
        let game = room.lock().await.ai_move().await?;
        Ok(game)
    }

    /// Marks an identity's connection as gone; its slot survives.
    pub async fn disconnect(&self, id: ID<Game>, identity: Identity) -> anyhow::Result<()> {
        let room = self.room(id).await?;
        room.lock().await.disconnect(&identity);
        Ok(())
    }

    /// Closes a session and forgets its stored snapshot.
    pub async fn close(&self, id: ID<Game>) -> anyhow::Result<()> {
        self.rooms
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| anyhow::anyhow!("session not found"))?;
        self.store.delete(id).await?;
        log::info!("[lobby] closed session {}", id);
        Ok(())
    }

    /// Fetches the live room, resurrecting it from the store when the
    /// registry no longer holds it.
    async fn room(&self, id: ID<Game>) -> anyhow::Result<Arc<Mutex<Room>>> {
        if let Some(room) = self.rooms.read().await.get(&id) {
            return Ok(room.clone());
        }
        let game = self.store.load(id).await?;
        log::info!("[lobby] resurrected session {}", id);
        let room = Arc::new(Mutex::new(Room::new(game, self.store.clone())));
        let mut rooms = self.rooms.write().await;
        Ok(rooms.entry(id).or_insert(room).clone())
    }
}
