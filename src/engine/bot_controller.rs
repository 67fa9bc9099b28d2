use super::board::Board;
use super::session_rng::SessionRng;
use super::types::{BOARD_SIZE, Mark, Position};

// With a single empty cell left, 32 uniform draws still miss with
// probability (8/9)^32 ~ 2%; the fallback below covers that tail.
const MAX_RANDOM_DRAWS: u32 = 32;

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    if board.is_full() {
        return None;
    }

    for _ in 0..MAX_RANDOM_DRAWS {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        if board.get_value_at(row, col) == Ok(Mark::Empty) {
            return Some(Position::new(row, col));
        }
    }

    let available_moves = board.get_available_moves();
    rng.choose(&available_moves).copied()
}
