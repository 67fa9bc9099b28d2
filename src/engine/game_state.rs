use crate::log;
use crate::names::{MISSING_NAME_MARKER, NameStore};

use super::board::Board;
use super::bot_controller::calculate_random_move;
use super::player::Player;
use super::session_rng::SessionRng;
use super::types::{Mark, MoveOutcome, PlayerKind};

pub const MOVES_FOR_WIN: u32 = 3;
pub const MOVES_FOR_DRAW: u32 = 9;

#[derive(Debug)]
pub struct GameState {
    players: [Player; 2],
    current_index: usize,
    running: bool,
    winner_index: Option<usize>,
    rng: SessionRng,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::from_rng(SessionRng::from_random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SessionRng::new(seed))
    }

    fn from_rng(rng: SessionRng) -> Self {
        Self {
            players: [Player::new(Mark::X), Player::new(Mark::O)],
            current_index: 0,
            running: false,
            winner_index: None,
            rng,
        }
    }

    pub fn play(&mut self) {
        if !self.running {
            self.running = true;
        }
    }

    pub fn reset(&mut self, board: &mut Board) {
        self.running = true;
        board.clear();
        self.current_index = 0;
        self.winner_index = None;
        for player in self.players.iter_mut() {
            player.reset_moves();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn get_current_player_name(&self) -> String {
        self.players[self.current_index].get_name()
    }

    pub fn get_winner_name(&self) -> Option<String> {
        self.winner_index.map(|index| self.players[index].get_name())
    }

    pub fn update_names(&mut self, names: &[&str; 2]) -> [bool; 2] {
        let mut accepted = [false; 2];
        for (index, name) in names.iter().enumerate() {
            accepted[index] = self.players[index].set_name(name);
            if !accepted[index] {
                log!("Rejected blank name for player {}", index + 1);
            }
        }
        accepted
    }

    pub fn set_opponent_kind(&mut self, kind: PlayerKind) {
        if self.running {
            log!("Ignoring opponent kind change while a game is running");
            return;
        }
        self.players[1].set_kind(kind);
    }

    pub fn place_symbol_for_current_player(
        &mut self,
        board: &mut Board,
        row: usize,
        col: usize,
    ) -> MoveOutcome {
        if !self.running {
            return MoveOutcome::NONE;
        }

        let Some(outcome) = self.apply_move(board, row, col) else {
            return MoveOutcome::NONE;
        };
        if outcome.is_terminal() {
            return outcome;
        }

        self.advance_turn();
        if self.players[self.current_index].kind() == PlayerKind::Computer {
            return self.play_computer_turn(board);
        }

        MoveOutcome::NONE
    }

    // Places for the player whose turn it is and runs the terminal checks.
    // Returns None when the board rejects the placement; the turn index is
    // left untouched in every branch.
    fn apply_move(&mut self, board: &mut Board, row: usize, col: usize) -> Option<MoveOutcome> {
        let symbol = self.players[self.current_index].symbol();
        if !board.set_value_at(row, col, symbol) {
            log!(
                "Rejected placement at ({}, {}) for {}",
                row,
                col,
                self.players[self.current_index].get_name()
            );
            return None;
        }

        let move_count = self.players[self.current_index].update_moves();

        if move_count >= MOVES_FOR_WIN {
            if board.get_winner_symbol() == Some(symbol) {
                self.running = false;
                self.winner_index = Some(self.current_index);
                return Some(MoveOutcome::WIN);
            }
            if self.total_moves() == MOVES_FOR_DRAW {
                self.running = false;
                return Some(MoveOutcome::DRAW);
            }
        }

        Some(MoveOutcome::NONE)
    }

    fn play_computer_turn(&mut self, board: &mut Board) -> MoveOutcome {
        let Some(position) = calculate_random_move(board, &mut self.rng) else {
            return MoveOutcome::NONE;
        };

        let Some(outcome) = self.apply_move(board, position.row, position.col) else {
            return MoveOutcome::NONE;
        };
        if outcome.is_terminal() {
            return outcome;
        }

        self.advance_turn();
        MoveOutcome::NONE
    }

    fn advance_turn(&mut self) {
        self.current_index = (self.current_index + 1) % 2;
    }

    fn total_moves(&self) -> u32 {
        self.players.iter().map(|player| player.moves()).sum()
    }

    pub fn load_names(&mut self, store: &impl NameStore) {
        for index in 0..self.players.len() {
            match store.get(index) {
                Ok(Some(name)) => {
                    if name != MISSING_NAME_MARKER {
                        self.players[index].set_name(&name);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log!("Failed to read stored name for player {}: {}", index + 1, e);
                }
            }
        }
    }

    pub fn update_names_persistent(
        &mut self,
        names: &[&str; 2],
        store: &mut impl NameStore,
    ) -> [bool; 2] {
        let accepted = self.update_names(names);
        for (index, &was_accepted) in accepted.iter().enumerate() {
            if was_accepted {
                if let Err(e) = store.set(index, names[index]) {
                    log!("Failed to persist name for player {}: {}", index + 1, e);
                }
            }
        }
        accepted
    }
}
