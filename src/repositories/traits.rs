use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book between runs.
///
/// Provides abstraction over where the book is stored, enabling different
/// implementations (JSON file, in-memory mock). Implementations must
/// round-trip every record exactly: name, phones in order, birthday.
pub trait AddressBookRepository: Send + Sync {
    /// Load the stored book, or an empty one if nothing has been stored yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
