mod board;
mod bot_controller;
mod game_state;
mod player;
mod session_rng;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::calculate_random_move;
pub use game_state::{GameState, MOVES_FOR_DRAW, MOVES_FOR_WIN};
pub use player::Player;
pub use session_rng::SessionRng;
pub use types::{BOARD_SIZE, BoardError, Mark, MoveOutcome, PlayerKind, Position};
pub use win_detector::check_win;

#[cfg(test)]
mod integration_tests {
    use crate::names::{MemoryNameStore, NameStore};

    use super::{Board, GameState, Mark, MoveOutcome, PlayerKind};

    // Drives the engine the way a rendering layer would: place on click,
    // then re-read the snapshot and the running flag.
    fn render(board: &Board) -> String {
        board
            .get_representation()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_two_human_game_to_a_column_win() {
        let mut state = GameState::with_seed(42);
        let mut board = Board::new();
        state.update_names(&["Alice", "Bob"]);
        state.play();

        let moves = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)];
        let mut last_outcome = MoveOutcome::NONE;
        for (row, col) in moves {
            last_outcome = state.place_symbol_for_current_player(&mut board, row, col);
        }

        assert_eq!(last_outcome, MoveOutcome::WIN);
        assert!(!state.is_running());
        assert_eq!(state.get_winner_name(), Some("Alice".to_string()));
        assert_eq!(render(&board), "XO#\nXO#\nX##");
    }

    #[test]
    fn test_restart_after_terminal_outcome() {
        let mut state = GameState::with_seed(42);
        let mut board = Board::new();
        state.play();

        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            state.place_symbol_for_current_player(&mut board, row, col);
        }
        assert!(!state.is_running());

        state.reset(&mut board);

        assert_eq!(render(&board), "###\n###\n###");
        assert_eq!(state.get_current_player_name(), "X");
        let outcome = state.place_symbol_for_current_player(&mut board, 1, 1);
        assert_eq!(outcome, MoveOutcome::NONE);
        assert_eq!(render(&board), "###\n#X#\n###");
    }

    #[test]
    fn test_seeded_computer_game_is_reproducible() {
        let mut boards = Vec::new();

        for _ in 0..2 {
            let mut state = GameState::with_seed(1234);
            let mut board = Board::new();
            state.set_opponent_kind(PlayerKind::Computer);
            state.play();

            while state.is_running() {
                let position = board.get_available_moves()[0];
                state.place_symbol_for_current_player(&mut board, position.row, position.col);
            }
            boards.push(render(&board));
        }

        assert_eq!(boards[0], boards[1]);
    }

    #[test]
    fn test_computer_only_fills_empty_cells_over_many_games() {
        for seed in 0..40 {
            let mut state = GameState::with_seed(seed);
            let mut board = Board::new();
            state.set_opponent_kind(PlayerKind::Computer);
            state.play();

            while state.is_running() {
                let before = board.get_available_moves().len();
                let position = board.get_available_moves()[0];
                let outcome =
                    state.place_symbol_for_current_player(&mut board, position.row, position.col);
                let after = board.get_available_moves().len();

                // One cell for the human, and one more for the computer
                // unless the human's move ended the game.
                if outcome.is_terminal() {
                    assert!(before - after <= 2, "seed {}", seed);
                } else {
                    assert_eq!(before - after, 2, "seed {}", seed);
                }
            }

            let representation = board.get_representation();
            let x_count = representation
                .iter()
                .flatten()
                .filter(|&&m| m == Mark::X)
                .count();
            let o_count = representation
                .iter()
                .flatten()
                .filter(|&&m| m == Mark::O)
                .count();
            assert!(x_count >= o_count, "seed {}", seed);
            assert!(x_count - o_count <= 1, "seed {}", seed);
        }
    }

    #[test]
    fn test_names_survive_via_store_across_sessions() {
        let mut store = MemoryNameStore::new();

        {
            let mut state = GameState::with_seed(7);
            state.update_names_persistent(&["Alice", "Bob"], &mut store);
        }

        let mut state = GameState::with_seed(8);
        state.load_names(&store);
        let mut board = Board::new();
        state.play();

        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            state.place_symbol_for_current_player(&mut board, row, col);
        }

        assert_eq!(state.get_winner_name(), Some("Alice".to_string()));
        assert_eq!(store.get(1).unwrap(), Some("Bob".to_string()));
    }
}
