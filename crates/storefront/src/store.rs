//! Persistent storage for the cart snapshot.
//!
//! The snapshot is a single JSON array of line items kept in one fixed
//! location. Persistence is a convenience: callers treat every error here as a
//! reason to log and carry on with the in-memory cart.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use blaze_pizza_core::CartState;
use thiserror::Error;

/// File name of the snapshot inside the data directory.
pub const CART_FILE_NAME: &str = "cart.json";

/// Errors reading or writing the cart snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the underlying storage failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stored snapshot exists but is not a valid cart.
    #[error("Malformed cart snapshot: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The cart could not be serialized.
    #[error("Failed to serialize cart: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Read/write contract for the cart snapshot.
pub trait CartStore {
    /// Load the stored snapshot.
    ///
    /// A missing snapshot is not an error and yields an empty cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the snapshot exists but cannot be read or parsed.
    fn load(&self) -> Result<CartState, StoreError>;

    /// Overwrite the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart cannot be serialized or written.
    fn save(&self, cart: &CartState) -> Result<(), StoreError>;
}

// =============================================================================
// FileCartStore
// =============================================================================

/// Stores the snapshot as `cart.json` inside a data directory.
///
/// Writes go to a temporary sibling and are renamed into place, so an
/// interrupted save leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    /// Store the snapshot in `data_dir/cart.json`.
    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(CART_FILE_NAME),
        }
    }

    /// Store the snapshot at an exact path.
    #[must_use]
    pub const fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CartStore for FileCartStore {
    fn load(&self) -> Result<CartState, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CartState::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_slice(&bytes).map_err(StoreError::Malformed)
    }

    fn save(&self, cart: &CartState) -> Result<(), StoreError> {
        let json = serde_json::to_vec(cart).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let write_tmp = || -> io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(&json)?;
            file.sync_all()
        };
        write_tmp().map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))
    }
}

// =============================================================================
// MemoryCartStore
// =============================================================================

/// Keeps the serialized snapshot in memory.
///
/// Used by tests and whenever the cart should not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    slot: Mutex<Option<String>>,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw payload already in the slot.
    #[must_use]
    pub fn with_raw(payload: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(payload.into())),
        }
    }

    /// The raw payload currently stored, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Result<CartState, StoreError> {
        self.raw().map_or_else(
            || Ok(CartState::new()),
            |raw| serde_json::from_str(&raw).map_err(StoreError::Malformed),
        )
    }

    fn save(&self, cart: &CartState) -> Result<(), StoreError> {
        let json = serde_json::to_string(cart).map_err(StoreError::Serialize)?;
        *self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(json);
        Ok(())
    }
}

impl<S: CartStore + ?Sized> CartStore for &S {
    fn load(&self) -> Result<CartState, StoreError> {
        (**self).load()
    }

    fn save(&self, cart: &CartState) -> Result<(), StoreError> {
        (**self).save(cart)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use blaze_pizza_core::{LineItem, PizzaId, Price, Size};
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_cart() -> CartState {
        let mut cart = CartState::new();
        cart.add(LineItem {
            pizza_id: PizzaId::from(1_u64),
            name: "Margherita".to_string(),
            size: Size::Medium,
            unit_price: Price::new(dec!(12.50)),
            quantity: 3,
            image: "m.jpg".to_string(),
        });
        cart.add(LineItem {
            pizza_id: PizzaId::new("pep"),
            name: "Pepperoni".to_string(),
            size: Size::Large,
            unit_price: Price::new(dec!(16.49)),
            quantity: 1,
            image: "p.jpg".to_string(),
        });
        cart
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::in_dir(dir.path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_round_trip_on_fresh_instance() {
        let dir = tempfile::tempdir().unwrap();
        let cart = sample_cart();
        FileCartStore::in_dir(dir.path()).save(&cart).unwrap();

        let loaded = FileCartStore::in_dir(dir.path()).load().unwrap();
        assert_eq!(loaded, cart);
        assert_eq!(loaded.subtotal(), Price::new(dec!(53.99)));
    }

    #[test]
    fn test_file_store_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileCartStore::in_dir(&nested);
        store.save(&sample_cart()).unwrap();
        assert!(nested.join(CART_FILE_NAME).exists());
        assert!(!nested.join("cart.json.tmp").exists());
    }

    #[test]
    fn test_file_store_malformed_payload() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::in_dir(dir.path());
        fs::write(store.path(), b"{not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Malformed(_))));
    }

    #[test]
    fn test_file_store_wrong_shape_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::in_dir(dir.path());
        fs::write(store.path(), br#"{"items": []}"#).unwrap();
        assert!(matches!(store.load(), Err(StoreError::Malformed(_))));
    }

    #[test]
    fn test_file_store_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::in_dir(dir.path());
        store.save(&sample_cart()).unwrap();
        store.save(&CartState::new()).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn test_file_store_unwritable_location() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file, not a directory").unwrap();
        let store = FileCartStore::in_dir(&blocker);
        assert!(matches!(store.save(&sample_cart()), Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryCartStore::new();
        assert!(store.load().unwrap().is_empty());
        store.save(&sample_cart()).unwrap();
        assert_eq!(store.load().unwrap(), sample_cart());
    }

    #[test]
    fn test_memory_store_malformed() {
        let store = MemoryCartStore::with_raw("[{\"pizza_id\": 1}]");
        assert!(matches!(store.load(), Err(StoreError::Malformed(_))));
    }
}
