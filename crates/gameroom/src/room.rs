use super::Event;
use super::Identity;
use super::SessionError;
use super::Table;
use ssk_board::Move;
use ssk_board::Player;
use ssk_bots::Strategy;
use ssk_core::ID;
use ssk_core::SLOTS;
use ssk_core::Unique;
use ssk_gameplay::Game;
use ssk_gameplay::Mode;
use ssk_gameplay::Status;
use ssk_store::SessionStore;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Live session coordinator.
///
/// Owns the authoritative [`Game`] plus everything the rules crate does not
/// know about: which identity holds which slot, who is connected, and the
/// bot for player-versus-AI sessions. The caller serializes access (one
/// lock per session), so each method body is one atomic critical section:
/// no observer ever sees a half-applied transition, and a submitted move's
/// bot reply lands before the submitting call returns.
///
/// Slot bindings are server-held state. A client's claimed player number is
/// only ever checked against the binding, never trusted.
pub struct Room {
    game: Game,
    slots: [Option<Identity>; SLOTS],
    table: Table,
    bot: Option<Box<dyn Strategy>>,
    store: Arc<dyn SessionStore>,
}

impl Room {
    /// Wraps a session snapshot, attaching the bot for pva sessions.
    pub fn new(game: Game, store: Arc<dyn SessionStore>) -> Self {
        let bot = match game.mode() {
            Mode::Pva => Some(ssk_bots::for_difficulty(game.difficulty())),
            Mode::Pvp => None,
        };
        Self {
            game,
            slots: [const { None }; SLOTS],
            table: Table::new(),
            bot,
            store,
        }
    }

    /// Current session snapshot.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Binds an identity to a slot and seats its connection.
    ///
    /// The creator claims slot 1; the first distinct non-creator identity
    /// claims slot 2 and activates a waiting pvp session. An identity this
    /// room has already seen is re-seated at its original slot instead of
    /// consuming a new one. Anyone else is turned away.
    pub async fn join(
        &mut self,
        identity: Identity,
        name: String,
        as_creator: bool,
        sender: UnboundedSender<Event>,
    ) -> Result<Player, SessionError> {
        if self.slot(&identity).is_some() {
            return self.rejoin(&identity, sender);
        }
        let player = match as_creator {
            true => {
                if self.slots[0].is_some() {
                    return Err(SessionError::SessionFull);
                }
                self.slots[0] = Some(identity);
                Player::One
            }
            false => {
                if self.game.mode() == Mode::Pva || self.slots[1].is_some() {
                    return Err(SessionError::SessionFull);
                }
                // A waiting session binds its second player here; an active
                // store-recovered one only recognizes the recorded name.
                if self.game.status() == Status::Waiting {
                    self.game = self.game.assign_player2(name)?;
                    self.store.save(self.game.id(), &self.game).await?;
                } else if self.game.player2_name() != Some(name.as_str()) {
                    return Err(SessionError::SessionFull);
                }
                self.slots[1] = Some(identity);
                Player::Two
            }
        };
        log::info!("[room {}] P{} joined", self.game.id(), player);
        self.table.sit(player, sender);
        self.table.unicast(player, Event::Assignment { player });
        let update = Event::Update {
            game: self.game.clone(),
        };
        match player {
            Player::One => self.table.unicast(player, update),
            Player::Two => self.table.broadcast(update),
        }
        Ok(player)
    }

    /// Re-seats a previously-bound identity after a transient disconnect.
    /// The game state is untouched; the rejoiner gets its assignment and
    /// the current snapshot.
    pub fn rejoin(
        &mut self,
        identity: &Identity,
        sender: UnboundedSender<Event>,
    ) -> Result<Player, SessionError> {
        let player = self.slot(identity).ok_or(SessionError::Unrecognized)?;
        log::info!("[room {}] P{} rejoined", self.game.id(), player);
        self.table.sit(player, sender);
        self.table.unicast(player, Event::Assignment { player });
        self.table.unicast(
            player,
            Event::Update {
                game: self.game.clone(),
            },
        );
        Ok(player)
    }

    /// Resolves and applies one move for the given identity, then the bot's
    /// reply when one is due. The returned snapshot already reflects both.
    /// Failures are reported back to the identity's connection and leave
    /// the session untouched.
    pub async fn submit(&mut self, identity: &Identity, mv: Move) -> Result<Game, SessionError> {
        match self.resolve(identity, mv).await {
            Ok(game) => Ok(game),
            Err(e) => {
                log::debug!("[room {}] rejected {}: {}", self.game.id(), mv, e);
                if let Some(player) = self.slot(identity) {
                    self.table.unicast(
                        player,
                        Event::Rejection {
                            reason: e.to_string(),
                        },
                    );
                }
                Err(e)
            }
        }
    }

    /// Fallback trigger for one bot turn outside the normal move path.
    pub async fn ai_move(&mut self) -> Result<Game, SessionError> {
        match self.bot_to_move() {
            true => {
                self.reply().await?;
                Ok(self.game.clone())
            }
            false => Err(SessionError::Rules(ssk_gameplay::RulesError::NotYourTurn)),
        }
    }

    /// Marks an identity's connection as gone. Its slot and the session
    /// survive for a later rejoin.
    pub fn disconnect(&mut self, identity: &Identity) {
        if let Some(player) = self.slot(identity) {
            log::info!("[room {}] P{} disconnected", self.game.id(), player);
            self.table.disconnect(player);
        }
    }

    /// True while the identity's connection is live.
    pub fn is_connected(&self, identity: &Identity) -> bool {
        self.slot(identity)
            .map(|player| !self.table.is_disconnected(player))
            .unwrap_or(false)
    }

    async fn resolve(&mut self, identity: &Identity, mv: Move) -> Result<Game, SessionError> {
        let player = self.slot(identity).ok_or(SessionError::NotJoined)?;
        if mv.player != player {
            return Err(SessionError::Rules(ssk_gameplay::RulesError::NotYourTurn));
        }
        self.transition(self.game.apply(mv)?).await?;
        log::info!("[room {}] {}", self.game.id(), mv);
        if self.bot_to_move() {
            self.reply().await?;
        }
        Ok(self.game.clone())
    }

    /// The bot moves when a pva session is active and slot 2 holds the turn.
    fn bot_to_move(&self) -> bool {
        self.bot.is_some()
            && self.game.status() == Status::Active
            && self.game.current_player() == Player::Two
    }

    async fn reply(&mut self) -> Result<(), SessionError> {
        let Some(bot) = self.bot.as_mut() else {
            return Err(SessionError::Rules(ssk_gameplay::RulesError::NotYourTurn));
        };
        let mv = bot.choose(self.game.board(), Player::Two)?;
        self.transition(self.game.apply(mv)?).await?;
        log::info!("[room {}] {} (bot)", self.game.id(), mv);
        Ok(())
    }

    /// Commits a successful transition: write through, then broadcast.
    async fn transition(&mut self, game: Game) -> Result<(), SessionError> {
        self.store.save(game.id(), &game).await?;
        self.game = game;
        self.table.broadcast(Event::Update {
            game: self.game.clone(),
        });
        Ok(())
    }

    fn slot(&self, identity: &Identity) -> Option<Player> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref() == Some(identity))
            .map(|i| match i {
                0 => Player::One,
                _ => Player::Two,
            })
    }
}

impl Unique<Game> for Room {
    fn id(&self) -> ID<Game> {
        self.game.id()
    }
}
