use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use super::{NameStore, NameStoreError, PLAYER_SLOTS};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
struct StoredNames {
    player_one: Option<String>,
    player_two: Option<String>,
}

impl StoredNames {
    fn name_at(&self, index: usize) -> Option<String> {
        match index {
            0 => self.player_one.clone(),
            _ => self.player_two.clone(),
        }
    }

    fn set_name_at(&mut self, index: usize, name: String) {
        match index {
            0 => self.player_one = Some(name),
            _ => self.player_two = Some(name),
        }
    }
}

pub struct FileNameStore {
    file_path: String,
}

impl FileNameStore {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }

    fn read_names(&self) -> Result<StoredNames, NameStoreError> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => serde_yaml_ng::from_str(&content).map_err(|e| {
                NameStoreError::FormatError(format!("Failed to deserialize name file: {}", e))
            }),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(StoredNames::default()),
                _ => Err(NameStoreError::IoError(err)),
            },
        }
    }

    fn write_names(&self, names: &StoredNames) -> Result<(), NameStoreError> {
        let content = serde_yaml_ng::to_string(names).map_err(|e| {
            NameStoreError::FormatError(format!("Failed to serialize name file: {}", e))
        })?;
        std::fs::write(self.file_path.as_str(), content)?;
        Ok(())
    }
}

impl NameStore for FileNameStore {
    fn get(&self, index: usize) -> Result<Option<String>, NameStoreError> {
        if index >= PLAYER_SLOTS {
            return Err(NameStoreError::UnknownPlayer { index });
        }
        let names = self.read_names()?;
        Ok(names.name_at(index))
    }

    fn set(&mut self, index: usize, name: &str) -> Result<(), NameStoreError> {
        if index >= PLAYER_SLOTS {
            return Err(NameStoreError::UnknownPlayer { index });
        }
        let mut names = self.read_names()?;
        names.set_name_at(index, name.to_string());
        self.write_names(&names)
    }
}
