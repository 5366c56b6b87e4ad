use super::Event;
use ssk_board::Player;
use ssk_core::SLOTS;
use std::collections::HashSet;
use tokio::sync::mpsc::UnboundedSender;

/// Per-slot outbound channels and liveness.
///
/// Liveness is independent of game status: a disconnected slot keeps its
/// binding and its game state, it just stops receiving events until the
/// identity sits back down.
#[derive(Debug)]
pub struct Table {
    senders: Vec<Option<UnboundedSender<Event>>>,
    disconnected: HashSet<Player>,
}

impl Table {
    pub fn new() -> Self {
        Self {
            senders: vec![None; SLOTS],
            disconnected: HashSet::new(),
        }
    }
    /// Seats (or re-seats) a slot's connection, reviving its liveness.
    pub fn sit(&mut self, player: Player, sender: UnboundedSender<Event>) {
        self.senders[Self::index(player)] = Some(sender);
        self.disconnected.remove(&player);
    }
    /// Marks a slot's connection as gone. The binding survives.
    pub fn disconnect(&mut self, player: Player) {
        self.disconnected.insert(player);
    }
    pub fn is_disconnected(&self, player: Player) -> bool {
        self.disconnected.contains(&player)
    }
    /// Number of slots currently seated and live.
    pub fn connected_count(&self) -> usize {
        [Player::One, Player::Two]
            .into_iter()
            .filter(|&p| self.sender(p).is_some() && !self.is_disconnected(p))
            .count()
    }
    fn sender(&self, player: Player) -> Option<&UnboundedSender<Event>> {
        self.senders[Self::index(player)].as_ref()
    }
    fn index(player: Player) -> usize {
        player.number() as usize - 1
    }
    /// Sends an event to one slot.
    pub fn unicast(&self, player: Player, event: Event) {
        log::debug!("[table] unicast to P{}: {}", player, event);
        match self.sender(player).map(|inbox| inbox.send(event)) {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("[table] unicast to P{} failed: {:?}", player, e),
            None => log::warn!("[table] unicast to P{}: not seated", player),
        }
    }
    /// Sends an event to every seated slot.
    pub fn broadcast(&self, event: Event) {
        log::debug!("[table] broadcast: {}", event);
        for player in [Player::One, Player::Two] {
            if let Some(inbox) = self.sender(player) {
                if let Err(e) = inbox.send(event.clone()) {
                    log::warn!("[table] broadcast to P{} failed: {:?}", player, e);
                }
            }
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn empty_table_has_no_connections() {
        let table = Table::new();
        assert_eq!(table.connected_count(), 0);
    }

    #[test]
    fn sit_disconnect_and_reseat() {
        let mut table = Table::new();
        let (tx, _rx) = unbounded_channel();
        table.sit(Player::One, tx.clone());
        assert_eq!(table.connected_count(), 1);
        table.disconnect(Player::One);
        assert!(table.is_disconnected(Player::One));
        assert_eq!(table.connected_count(), 0);
        table.sit(Player::One, tx);
        assert!(!table.is_disconnected(Player::One));
        assert_eq!(table.connected_count(), 1);
    }

    #[test]
    fn broadcast_reaches_every_seat() {
        let mut table = Table::new();
        let (tx1, mut rx1) = unbounded_channel();
        let (tx2, mut rx2) = unbounded_channel();
        table.sit(Player::One, tx1);
        table.sit(Player::Two, tx2);
        table.broadcast(Event::Rejection {
            reason: "test".into(),
        });
        assert!(rx1.try_recv().is_ok());
        assert!(rx2.try_recv().is_ok());
    }
}
