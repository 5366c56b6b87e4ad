//! Bot-vs-bot arena.
//!
//! Plays full player-versus-AI sessions through the lobby path: the
//! challenger bot submits moves as player 1 and the house bot answers
//! inside each submission. Configured by env vars:
//!
//! - `ARENA_GAMES` — sessions to play (default 10)
//! - `ARENA_HOUSE` — house difficulty: easy | medium | hard (default hard)
//! - `ARENA_CHALLENGER` — challenger difficulty (default medium)
//! - `ARENA_PACE` — optional delay between moves, e.g. "1s"
use ssk_board::Player;
use ssk_gameplay::Difficulty;
use ssk_gameplay::Mode;
use ssk_gameplay::Status;
use ssk_lobby::Lobby;
use ssk_store::MemoryStore;
use std::sync::Arc;

fn difficulty(var: &str, fallback: Difficulty) -> Difficulty {
    match std::env::var(var).as_deref() {
        Ok("easy") => Difficulty::Easy,
        Ok("medium") => Difficulty::Medium,
        Ok("hard") => Difficulty::Hard,
        _ => fallback,
    }
}

#[tokio::main]
async fn main() {
    ssk_core::log();
    let games = std::env::var("ARENA_GAMES")
        .ok()
        .and_then(|n| n.parse().ok())
        .unwrap_or(10);
    let house = difficulty("ARENA_HOUSE", Difficulty::Hard);
    let challenger = difficulty("ARENA_CHALLENGER", Difficulty::Medium);
    let pace = std::env::var("ARENA_PACE")
        .ok()
        .and_then(|s| ssk_core::parse_duration(&s));
    log::info!(
        "arena: {} games, {} (challenger) vs {} (house)",
        games,
        challenger,
        house,
    );
    let lobby = Lobby::new(Arc::new(MemoryStore::new()));
    let mut tally = [0usize; 3];
    for n in 0..games {
        match play(&lobby, house, challenger, pace).await {
            Ok(winner) => {
                match winner {
                    Some(Player::One) => tally[0] += 1,
                    Some(Player::Two) => tally[1] += 1,
                    None => tally[2] += 1,
                }
                log::info!("game {}: winner {:?}", n, winner);
            }
            Err(e) => log::error!("game {}: {}", n, e),
        }
    }
    log::info!(
        "arena done: challenger {} / house {} / draws {}",
        tally[0],
        tally[1],
        tally[2],
    );
}

/// Plays one session to completion and returns the winner.
async fn play(
    lobby: &Lobby,
    house: Difficulty,
    challenger: Difficulty,
    pace: Option<std::time::Duration>,
) -> anyhow::Result<Option<Player>> {
    let id = lobby
        .create(Mode::Pva, house, "Challenger".into(), None)
        .await?;
    let (_, _events) = lobby
        .join(id, "challenger".into(), "Challenger".into(), true)
        .await?;
    let mut bot = ssk_bots::for_difficulty(challenger);
    loop {
        let game = lobby.game(id).await?;
        if game.status() == Status::Finished {
            let winner = game.winner();
            lobby.close(id).await?;
            return Ok(winner);
        }
        let mv = bot
            .choose(game.board(), Player::One)
            .map_err(anyhow::Error::new)?;
        lobby.submit(id, "challenger".into(), mv).await?;
        if let Some(pace) = pace {
            tokio::time::sleep(pace).await;
        }
    }
}
