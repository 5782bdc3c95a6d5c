//! In-memory cart store and the notices its operations produce.

use crate::domain::entities::CartItem;
use crate::utils::item_id::generate_item_id;
use serde::Serialize;

/// How a notice is presented to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Transient confirmation.
    Toast,
    /// Blocking warning; the operation was refused.
    Alert,
}

/// Outcome of [`Cart::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartNotice {
    Added { domain: String },
    AlreadyInCart { domain: String },
    InvalidPrice,
}

impl CartNotice {
    pub fn kind(&self) -> NoticeKind {
        match self {
            Self::Added { .. } | Self::AlreadyInCart { .. } => NoticeKind::Toast,
            Self::InvalidPrice => NoticeKind::Alert,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Added { domain } => format!("Added {domain} to cart!"),
            Self::AlreadyInCart { domain } => format!("{domain} is already in the cart!"),
            Self::InvalidPrice => "This item does not have a valid price.".to_string(),
        }
    }

    /// Short code used to carry the notice across a redirect.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Added { .. } => "added",
            Self::AlreadyInCart { .. } => "duplicate",
            Self::InvalidPrice => "invalid_price",
        }
    }

    /// Rebuilds a notice from its redirect [`code`](Self::code).
    pub fn from_code(code: &str, domain: Option<&str>) -> Option<Self> {
        let domain = domain.unwrap_or_default().to_string();
        match code {
            "added" => Some(Self::Added { domain }),
            "duplicate" => Some(Self::AlreadyInCart { domain }),
            "invalid_price" => Some(Self::InvalidPrice),
            _ => None,
        }
    }

    /// Whether the cart changed.
    pub fn inserted(&self) -> bool {
        matches!(self, Self::Added { .. })
    }

    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::Added { domain } | Self::AlreadyInCart { domain } => Some(domain),
            Self::InvalidPrice => None,
        }
    }
}

/// Selected websites, at most one entry per domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Rebuilds a cart from persisted items.
    ///
    /// Later duplicates of an already present domain are dropped so the
    /// one-entry-per-domain rule holds even for hand-edited storage.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::default();
        for item in items {
            if !cart.contains_domain(&item.domain) {
                cart.items.push(item);
            }
        }
        cart
    }

    /// Adds a website unless its price is not a positive finite number or it
    /// is already present.
    pub fn add(&mut self, domain: &str, price: f64, product_type: &str) -> CartNotice {
        if !price.is_finite() || price <= 0.0 {
            return CartNotice::InvalidPrice;
        }

        if self.contains_domain(domain) {
            return CartNotice::AlreadyInCart {
                domain: domain.to_string(),
            };
        }

        let id = self.fresh_id();
        self.items.push(CartItem {
            id,
            domain: domain.to_string(),
            price,
            product_type: product_type.to_string(),
        });

        CartNotice::Added {
            domain: domain.to_string(),
        }
    }

    /// Removes the item with `id`; returns whether one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn contains_domain(&self, domain: &str) -> bool {
        self.items.iter().any(|item| item.domain == domain)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_item_id();
            if !self.items.iter().any(|item| item.id == id) {
                return id;
            }
        }
    }
}
