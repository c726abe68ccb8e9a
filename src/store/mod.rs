//! Domain entities and the persistence ports the HTTP layer talks to.
//!
//! Each resource has its own store trait so that members and orders can live
//! in different backends. The SQLite implementations live in [`crate::db`];
//! [`MemoryTable`] keeps everything in process.

mod memory;

use crate::errors::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use memory::MemoryTable;

/// A registered member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Identifier assigned by the member store, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name of the member
    pub name: String,
}

impl Member {
    /// Creates a member that has not been persisted yet
    pub fn new(name: impl Into<String>) -> Self {
        Member {
            id: None,
            name: name.into(),
        }
    }
}

/// A placed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier assigned by the order store, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Name of the order
    pub name: String,
}

impl Order {
    /// Creates an order that has not been persisted yet
    pub fn new(name: impl Into<String>) -> Self {
        Order {
            id: None,
            name: name.into(),
        }
    }
}

/// Persistence port for members
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Returns every stored member in insertion order
    async fn list_members(&self) -> Result<Vec<Member>, StoreError>;

    /// Stores a member and returns the identifier generated for it
    async fn add_member(&self, member: &Member) -> Result<i64, StoreError>;
}

/// Persistence port for orders
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Returns every stored order in insertion order
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError>;

    /// Stores an order and returns the identifier generated for it
    async fn add_order(&self, order: &Order) -> Result<i64, StoreError>;
}
