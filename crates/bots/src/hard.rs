use super::NoLegalMoves;
use super::SearchBudget;
use super::Strategy;
use ssk_board::Board;
use ssk_board::Move;
use ssk_board::Player;
use ssk_board::Side;
use ssk_core::CONNECT;
use ssk_core::Row;
use ssk_core::SCORE_CENTER;
use ssk_core::SCORE_OPEN_THREE;
use ssk_core::SCORE_OPEN_TWO;
use ssk_core::SCORE_WIN;
use ssk_core::SEARCH_DEPTH;
use ssk_core::SIZE;
use ssk_core::Score;

/// Search window bound. Strictly dominates any reachable score, so negation
/// never overflows.
const INFINITY: Score = 2 * SCORE_WIN;
/// Line directions for the window scan.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Bounded negamax over the legal-move tree with alpha-beta pruning.
///
/// Depth and budget caps live in `ssk_core`. When the budget runs dry the
/// search truncates to the heuristic and keeps the best line found so far,
/// so a legal move always comes back as long as one exists. Ties break
/// toward the first move found at the best score, making the tier fully
/// deterministic.
pub struct Hard;

impl Strategy for Hard {
    fn choose(&mut self, board: &Board, player: Player) -> Result<Move, NoLegalMoves> {
        // An immediately winning move needs no search.
        if let Some(mv) = Self::winning(board, player) {
            return Ok(mv);
        }
        let mut budget = SearchBudget::start();
        let mut best: Option<(Move, Score)> = None;
        for (row, side) in Self::ordered(board) {
            let mv = Move::new(row, side, player);
            let Some(child) = board.with(mv) else {
                continue;
            };
            let floor = best.map(|(_, score)| score).unwrap_or(-INFINITY);
            let score = -Self::negamax(
                &child,
                player.other(),
                SEARCH_DEPTH - 1,
                -INFINITY,
                -floor,
                &mut budget,
            );
            if best.is_none_or(|(_, old)| score > old) {
                best = Some((mv, score));
            }
            if budget.exhausted() {
                log::debug!("[hard] budget spent after {} nodes", budget.nodes());
                break;
            }
        }
        log::debug!(
            "[hard] searched {} nodes, best {:?}",
            budget.nodes(),
            best
        );
        best.map(|(mv, _)| mv).ok_or(NoLegalMoves)
    }
}

impl Hard {
    fn negamax(
        board: &Board,
        player: Player,
        depth: usize,
        mut alpha: Score,
        beta: Score,
        budget: &mut SearchBudget,
    ) -> Score {
        if !budget.tick() {
            return Self::evaluate(board, player);
        }
        if let Some(winner) = board.winner() {
            // Deeper remaining depth means a faster win; prefer it.
            let score = SCORE_WIN + depth as Score;
            return match winner == player {
                true => score,
                false => -score,
            };
        }
        if board.is_full() {
            return 0;
        }
        if depth == 0 {
            return Self::evaluate(board, player);
        }
        for (row, side) in Self::ordered(board) {
            let Some(child) = board.with(Move::new(row, side, player)) else {
                continue;
            };
            let score = -Self::negamax(&child, player.other(), depth - 1, -beta, -alpha, budget);
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }
        alpha
    }

    /// First move that completes a run for `player`, in enumeration order.
    fn winning(board: &Board, player: Player) -> Option<Move> {
        board.moves().into_iter().find_map(|(row, side)| {
            let mv = Move::new(row, side, player);
            (board.with(mv).and_then(|next| next.winner()) == Some(player)).then_some(mv)
        })
    }

    /// Legal moves, center rows first. Center-out ordering tightens the
    /// alpha-beta window early.
    fn ordered(board: &Board) -> Vec<(Row, Side)> {
        let center = (SIZE / 2) as isize;
        let mut moves = board.moves();
        moves.sort_by_key(|&(row, _)| (row as isize - center).abs());
        moves
    }

    /// Static evaluation from `player`'s perspective: own open lines and
    /// center presence minus the opponent's.
    fn evaluate(board: &Board, player: Player) -> Score {
        Self::prospects(board, player) - Self::prospects(board, player.other())
    }

    /// Open-window weights plus center pull for one player.
    fn prospects(board: &Board, player: Player) -> Score {
        let center = (SIZE / 2) as isize;
        let mut score = 0;
        for row in 0..SIZE as isize {
            for col in 0..SIZE as isize {
                if board.cell(row as Row, col as usize) == Some(player) {
                    score += SCORE_CENTER * (center - (col - center).abs()) as i32;
                }
                for (dr, dc) in DIRECTIONS {
                    score += Self::window(board, player, row, col, dr, dc);
                }
            }
        }
        score
    }

    /// Weight of the CONNECT-cell window starting at (row, col) along
    /// (dr, dc): zero if out of bounds or contested by the opponent.
    fn window(
        board: &Board,
        player: Player,
        row: isize,
        col: isize,
        dr: isize,
        dc: isize,
    ) -> Score {
        let span = CONNECT as isize - 1;
        let (end_r, end_c) = (row + dr * span, col + dc * span);
        if !(0..SIZE as isize).contains(&end_r) || !(0..SIZE as isize).contains(&end_c) {
            return 0;
        }
        let mut own = 0;
        for i in 0..CONNECT as isize {
            match board.cell((row + dr * i) as Row, (col + dc * i) as usize) {
                Some(p) if p == player => own += 1,
                Some(_) => return 0,
                None => {}
            }
        }
        match own {
            3 => SCORE_OPEN_THREE,
            2 => SCORE_OPEN_TWO,
            _ => 0,
        }
    }
}
