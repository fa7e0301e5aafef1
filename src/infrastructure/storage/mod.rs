use crate::core::errors::UserCrudError;
use crate::core::models::user::User;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, UserCrudError>;
    async fn get_user(&self, user_id: i64) -> Result<Option<User>, UserCrudError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserCrudError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, UserCrudError>;
    /// Inserts when `user.id` is `None` (assigning a fresh id), otherwise overwrites.
    async fn save_user(&self, user: User) -> Result<User, UserCrudError>;
    /// Returns whether a record was removed.
    async fn delete_user(&self, user_id: i64) -> Result<bool, UserCrudError>;
}

#[async_trait]
impl<T: Storage + ?Sized> Storage for Arc<T> {
    async fn list_users(&self) -> Result<Vec<User>, UserCrudError> {
        (**self).list_users().await
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>, UserCrudError> {
        (**self).get_user(user_id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserCrudError> {
        (**self).get_user_by_email(email).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserCrudError> {
        (**self).exists_by_email(email).await
    }

    async fn save_user(&self, user: User) -> Result<User, UserCrudError> {
        (**self).save_user(user).await
    }

    async fn delete_user(&self, user_id: i64) -> Result<bool, UserCrudError> {
        (**self).delete_user(user_id).await
    }
}

pub mod in_memory;
pub mod sqlite;
