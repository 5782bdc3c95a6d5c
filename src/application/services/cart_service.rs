//! Persisted cart service.

use crate::domain::cart::{Cart, CartNotice};
use crate::domain::entities::CartItem;
use crate::error::AppError;
use crate::infrastructure::storage::CartStorage;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Storage key of the cart when none is configured.
pub const DEFAULT_CART_KEY: &str = "bsm_cart";

/// Serializes cart items as the persisted JSON array.
pub fn encode_cart(items: &[CartItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Parses a persisted JSON array of cart items.
pub fn decode_cart(raw: &str) -> Result<Vec<CartItem>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Service owning the visitor's cart.
///
/// The cart is restored once at construction and written back in full after
/// every mutation. The lock is held across the write so stored snapshots
/// follow the order of mutations.
pub struct CartService {
    cart: Mutex<Cart>,
    storage: Arc<dyn CartStorage>,
    key: String,
}

impl CartService {
    /// Restores the cart stored under `key`.
    ///
    /// A missing or unreadable value yields an empty cart.
    pub async fn restore(storage: Arc<dyn CartStorage>, key: impl Into<String>) -> Self {
        let key = key.into();

        let cart = match storage.load(&key).await {
            Ok(Some(raw)) => match decode_cart(&raw) {
                Ok(items) => Cart::from_items(items),
                Err(e) => {
                    warn!("Stored cart under '{}' is corrupt, starting empty: {}", key, e);
                    Cart::default()
                }
            },
            Ok(None) => Cart::default(),
            Err(e) => {
                warn!("Failed to read cart '{}', starting empty: {}", key, e);
                Cart::default()
            }
        };

        info!(
            "Cart restored from {} storage: {} items",
            storage.backend(),
            cart.count()
        );

        Self {
            cart: Mutex::new(cart),
            storage,
            key,
        }
    }

    /// Adds a website; persists only when an item was inserted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if persisting fails. The item stays in
    /// the in-memory cart.
    pub async fn add(
        &self,
        domain: &str,
        price: f64,
        product_type: &str,
    ) -> Result<CartNotice, AppError> {
        let mut cart = self.cart.lock().await;
        let notice = cart.add(domain, price, product_type);

        if notice.inserted() {
            self.persist(&cart).await?;
        }
        debug!("Cart add {}: {}", domain, notice.code());

        Ok(notice)
    }

    /// Removes the item with `id` and persists; returns whether one existed.
    pub async fn remove(&self, id: &str) -> Result<bool, AppError> {
        let mut cart = self.cart.lock().await;
        let removed = cart.remove(id);
        self.persist(&cart).await?;
        Ok(removed)
    }

    /// Empties the cart and persists.
    pub async fn clear(&self) -> Result<usize, AppError> {
        let mut cart = self.cart.lock().await;
        let count = cart.count();
        cart.clear();
        self.persist(&cart).await?;
        Ok(count)
    }

    pub async fn count(&self) -> usize {
        self.cart.lock().await.count()
    }

    /// Copy of the current cart.
    pub async fn snapshot(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    pub fn storage(&self) -> &Arc<dyn CartStorage> {
        &self.storage
    }

    async fn persist(&self, cart: &Cart) -> Result<(), AppError> {
        let encoded = encode_cart(cart.items()).map_err(|e| {
            AppError::internal("Failed to encode cart", json!({ "reason": e.to_string() }))
        })?;
        self.storage.save(&self.key, &encoded).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LINK_INSERTION;
    use crate::infrastructure::storage::{MemoryStorage, MockCartStorage, StorageError};

    #[test]
    fn test_encode_decode_round_trip() {
        let mut cart = Cart::default();
        cart.add("a.com", 10.0, LINK_INSERTION);
        cart.add("b.org", 24.99, LINK_INSERTION);

        let encoded = encode_cart(cart.items()).unwrap();
        let decoded = decode_cart(&encoded).unwrap();

        assert_eq!(decoded, cart.items());
    }

    #[tokio::test]
    async fn test_add_persists_and_restores() {
        let storage = Arc::new(MemoryStorage::new());

        let service = CartService::restore(storage.clone(), DEFAULT_CART_KEY).await;
        service.add("x.com", 10.0, LINK_INSERTION).await.unwrap();
        let before = service.snapshot().await;

        let restored = CartService::restore(storage.clone(), DEFAULT_CART_KEY).await;
        assert_eq!(restored.snapshot().await, before);
        assert_eq!(restored.count().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_add_keeps_single_item() {
        let service = CartService::restore(Arc::new(MemoryStorage::new()), DEFAULT_CART_KEY).await;

        service.add("x.com", 10.0, "t").await.unwrap();
        let notice = service.add("x.com", 10.0, "t").await.unwrap();

        assert_eq!(notice, CartNotice::AlreadyInCart { domain: "x.com".into() });
        assert_eq!(service.count().await, 1);
    }

    #[tokio::test]
    async fn test_rejected_add_does_not_write() {
        let mut storage = MockCartStorage::new();
        storage.expect_load().returning(|_| Ok(None));
        storage.expect_backend().return_const("mock");
        storage.expect_save().never();

        let service = CartService::restore(Arc::new(storage), DEFAULT_CART_KEY).await;
        let notice = service.add("x.com", 0.0, "t").await.unwrap();

        assert_eq!(notice, CartNotice::InvalidPrice);
        assert_eq!(service.count().await, 0);
    }

    #[tokio::test]
    async fn test_remove_persists_even_when_absent() {
        let mut storage = MockCartStorage::new();
        storage.expect_load().returning(|_| Ok(None));
        storage.expect_backend().return_const("mock");
        storage
            .expect_save()
            .times(1)
            .withf(|key, value| key.to_string() == DEFAULT_CART_KEY && value.to_string() == "[]")
            .returning(|_, _| Ok(()));

        let service = CartService::restore(Arc::new(storage), DEFAULT_CART_KEY).await;
        assert!(!service.remove("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_storage_restores_empty() {
        let storage = Arc::new(MemoryStorage::with_value(DEFAULT_CART_KEY, "{not json"));
        let service = CartService::restore(storage, DEFAULT_CART_KEY).await;
        assert_eq!(service.count().await, 0);
    }

    #[tokio::test]
    async fn test_unreadable_storage_restores_empty() {
        let mut storage = MockCartStorage::new();
        storage
            .expect_load()
            .returning(|_| Err(StorageError::Io("permission denied".into())));
        storage.expect_backend().return_const("mock");

        let service = CartService::restore(Arc::new(storage), DEFAULT_CART_KEY).await;
        assert_eq!(service.count().await, 0);
    }

    #[tokio::test]
    async fn test_failed_save_surfaces_error() {
        let mut storage = MockCartStorage::new();
        storage.expect_load().returning(|_| Ok(None));
        storage.expect_backend().return_const("mock");
        storage
            .expect_save()
            .returning(|_, _| Err(StorageError::Operation("read-only".into())));

        let service = CartService::restore(Arc::new(storage), DEFAULT_CART_KEY).await;
        let result = service.add("x.com", 5.0, "t").await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_clear() {
        let storage = Arc::new(MemoryStorage::new());
        let service = CartService::restore(storage.clone(), DEFAULT_CART_KEY).await;
        service.add("a.com", 1.0, "t").await.unwrap();
        service.add("b.com", 1.0, "t").await.unwrap();

        assert_eq!(service.clear().await.unwrap(), 2);
        assert_eq!(storage.get(DEFAULT_CART_KEY).as_deref(), Some("[]"));
    }
}
