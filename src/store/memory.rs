use super::{Member, MemberStore, Order, OrderStore};
use crate::errors::StoreError;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// In-process table used for ephemeral runs and as a test double.
///
/// Identifiers start at 1 and grow by one per insert, like a SQLite rowid.
#[derive(Debug)]
pub struct MemoryTable<T> {
    rows: Mutex<Vec<T>>,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        MemoryTable {
            rows: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Clone> MemoryTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    async fn snapshot(&self) -> Vec<T> {
        self.rows.lock().await.clone()
    }

    async fn insert_with(&self, build: impl FnOnce(i64) -> T) -> i64 {
        let mut rows = self.rows.lock().await;
        let id = rows.len() as i64 + 1;
        rows.push(build(id));
        id
    }
}

#[async_trait]
impl MemberStore for MemoryTable<Member> {
    async fn list_members(&self) -> Result<Vec<Member>, StoreError> {
        Ok(self.snapshot().await)
    }

    async fn add_member(&self, member: &Member) -> Result<i64, StoreError> {
        let id = self
            .insert_with(|id| Member {
                id: Some(id),
                name: member.name.clone(),
            })
            .await;
        Ok(id)
    }
}

#[async_trait]
impl OrderStore for MemoryTable<Order> {
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.snapshot().await)
    }

    async fn add_order(&self, order: &Order) -> Result<i64, StoreError> {
        let id = self
            .insert_with(|id| Order {
                id: Some(id),
                name: order.name.clone(),
            })
            .await;
        Ok(id)
    }
}
