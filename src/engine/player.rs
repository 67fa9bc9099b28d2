use super::types::{Mark, PlayerKind};

#[derive(Clone, Debug)]
pub struct Player {
    symbol: Mark,
    name: Option<String>,
    moves: u32,
    kind: PlayerKind,
}

impl Player {
    pub fn new(symbol: Mark) -> Self {
        Self {
            symbol,
            name: None,
            moves: 0,
            kind: PlayerKind::Human,
        }
    }

    pub fn symbol(&self) -> Mark {
        self.symbol
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: PlayerKind) {
        self.kind = kind;
    }

    pub fn get_name(&self) -> String {
        match self.name {
            Some(ref name) => name.clone(),
            None => self.symbol.to_string(),
        }
    }

    pub fn set_name(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.name = Some(name.to_string());
        true
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn update_moves(&mut self) -> u32 {
        self.moves += 1;
        self.moves
    }

    pub fn reset_moves(&mut self) {
        self.moves = 0;
    }
}
