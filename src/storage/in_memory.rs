//! In-memory stores for development and testing

use crate::core::query::Direction;
use crate::core::{Entity, EntityStore, Page, PageRequest, StorageError};
use crate::entities::account::{Account, AccountStore};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

/// In-memory entity store
///
/// Ids are assigned sequentially from 1. Rows are kept in id order, so an
/// unsorted page (and ties within a sorted one) come back in id order.
#[derive(Clone)]
pub struct InMemoryEntityStore<T: Entity> {
    table: Arc<RwLock<Table<T>>>,
}

impl<T: Entity> InMemoryEntityStore<T> {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl<T: Entity> Default for InMemoryEntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for InMemoryEntityStore<T> {
    async fn save(&self, mut entity: T) -> Result<T, StorageError> {
        let mut table = self.table.write().await;

        let id = match entity.id() {
            Some(id) => id,
            None => {
                let id = table.next_id;
                table.next_id += 1;
                entity.assign_id(id);
                id
            }
        };
        table.rows.insert(id, entity.clone());

        tracing::debug!(resource = T::resource_name(), id, "saved");
        Ok(entity)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, StorageError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<T>, StorageError> {
        let table = self.table.read().await;
        let total = table.rows.len();

        let mut rows: Vec<&T> = table.rows.values().collect();
        if let Some(sort) = &request.sort {
            rows.sort_by(|a, b| {
                let ordering = a.compare_field(b, &sort.property);
                match sort.direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            });
        }

        let content = rows
            .into_iter()
            .skip(request.offset())
            .take(request.size)
            .cloned()
            .collect();

        Ok(Page::new(content, request, total))
    }

    async fn count(&self) -> Result<usize, StorageError> {
        Ok(self.table.read().await.rows.len())
    }
}

/// In-memory account store keyed by email
#[derive(Clone, Default)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn save(&self, account: Account) -> Result<Account, StorageError> {
        self.accounts
            .write()
            .await
            .insert(account.email.clone(), account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StorageError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }
}
