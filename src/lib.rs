pub mod engine;
pub mod logger;
pub mod names;

pub use engine::{
    BOARD_SIZE, Board, BoardError, GameState, MOVES_FOR_DRAW, MOVES_FOR_WIN, Mark, MoveOutcome,
    Player, PlayerKind, Position, SessionRng, calculate_random_move, check_win,
};
pub use names::{
    FileNameStore, MISSING_NAME_MARKER, MemoryNameStore, NameStore, NameStoreError, PLAYER_SLOTS,
};
