use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use crate::repositories::traits::AddressBookRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// On-disk layout, read side.
#[derive(Deserialize)]
struct BookDocument {
    #[serde(default)]
    contacts: Vec<Record>,
}

/// On-disk layout, write side.
#[derive(Serialize)]
struct BookDocumentRef<'a> {
    contacts: Vec<&'a Record>,
}

/// Address book repository backed by a pretty-printed JSON file.
///
/// The document looks like
/// `{"contacts": [{"name": "Ann", "phones": ["0123456789"], "birthday": "12.06.1990"}]}`.
/// Saves go through a sibling temporary file and a rename, so an interrupted
/// save leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository storing the book at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No stored address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        let document: BookDocument =
            serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        let mut book = AddressBook::new();
        for record in document.contacts {
            // Repeated names: the last entry wins, as with add_record.
            book.add_record(record);
        }

        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Loaded address book"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let document = BookDocumentRef {
            contacts: book.records().collect(),
        };
        let json = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(parent, e))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| self.io_error(&temp, e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                warn!(path = %temp.display(), "Could not remove temporary file: {}", cleanup);
            }
            return Err(self.io_error(&self.path, e));
        }

        debug!(
            path = %self.path.display(),
            contacts = book.len(),
            "Saved address book"
        );
        Ok(())
    }
}
