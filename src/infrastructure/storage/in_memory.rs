use crate::core::errors::UserCrudError;
use crate::core::models::user::User;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Records {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    records: Arc<RwLock<Records>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn list_users(&self) -> Result<Vec<User>, UserCrudError> {
        let records = self.records.read().await;
        Ok(records.users.values().cloned().collect())
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>, UserCrudError> {
        let records = self.records.read().await;
        Ok(records.users.get(&user_id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserCrudError> {
        let records = self.records.read().await;
        Ok(records.users.values().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserCrudError> {
        let records = self.records.read().await;
        Ok(records.users.values().any(|u| u.email == email))
    }

    async fn save_user(&self, mut user: User) -> Result<User, UserCrudError> {
        let mut records = self.records.write().await;
        let id = match user.id {
            Some(id) => id,
            None => {
                records.last_id += 1;
                records.last_id
            }
        };
        user.id = Some(id);
        records.users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete_user(&self, user_id: i64) -> Result<bool, UserCrudError> {
        let mut records = self.records.write().await;
        Ok(records.users.remove(&user_id).is_some())
    }
}
