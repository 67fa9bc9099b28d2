mod file_store;

pub use file_store::FileNameStore;

use std::fmt;

pub const PLAYER_SLOTS: usize = 2;

// Browser key-value stores hand back the literal string "undefined" for a
// key that was never written; consumers treat it the same as an absent name.
pub const MISSING_NAME_MARKER: &str = "undefined";

#[derive(Debug)]
pub enum NameStoreError {
    IoError(std::io::Error),
    FormatError(String),
    UnknownPlayer { index: usize },
}

impl fmt::Display for NameStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameStoreError::IoError(e) => write!(f, "IO error: {}", e),
            NameStoreError::FormatError(e) => write!(f, "Format error: {}", e),
            NameStoreError::UnknownPlayer { index } => {
                write!(f, "No player slot with index {}", index)
            }
        }
    }
}

impl std::error::Error for NameStoreError {}

impl From<std::io::Error> for NameStoreError {
    fn from(e: std::io::Error) -> Self {
        NameStoreError::IoError(e)
    }
}

pub trait NameStore {
    fn get(&self, index: usize) -> Result<Option<String>, NameStoreError>;
    fn set(&mut self, index: usize, name: &str) -> Result<(), NameStoreError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryNameStore {
    names: [Option<String>; PLAYER_SLOTS],
}

impl MemoryNameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NameStore for MemoryNameStore {
    fn get(&self, index: usize) -> Result<Option<String>, NameStoreError> {
        if index >= PLAYER_SLOTS {
            return Err(NameStoreError::UnknownPlayer { index });
        }
        Ok(self.names[index].clone())
    }

    fn set(&mut self, index: usize, name: &str) -> Result<(), NameStoreError> {
        if index >= PLAYER_SLOTS {
            return Err(NameStoreError::UnknownPlayer { index });
        }
        self.names[index] = Some(name.to_string());
        Ok(())
    }
}
