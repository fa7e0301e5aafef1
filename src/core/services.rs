use crate::core::errors::UserCrudError;
use crate::core::models::user::{User, UserDraft};
use crate::core::validation::validate_user;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use tracing::{debug, info, warn};

pub struct UserService<S: Storage> {
    storage: S,
}

impl<S: Storage> UserService<S> {
    pub fn new(storage: S) -> Self {
        info!("Initializing UserService");
        UserService { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn validate(&self, draft: &UserDraft) -> Result<(), UserCrudError> {
        validate_user(draft).map_err(|errors| {
            warn!("Rejected user draft: {}", errors);
            UserCrudError::Validation(errors)
        })
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, UserCrudError> {
        let users = self.storage.list_users().await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    pub async fn get_user_by_id(&self, user_id: i64) -> Result<Option<User>, UserCrudError> {
        self.storage.get_user(user_id).await
    }

    pub async fn create_user(&self, draft: UserDraft) -> Result<User, UserCrudError> {
        self.validate(&draft)?;

        if self.storage.exists_by_email(&draft.email).await? {
            warn!("Create rejected, email {} already exists", draft.email);
            return Err(UserCrudError::EmailAlreadyExists(draft.email));
        }

        let user = self.storage.save_user(User::from_draft(draft, Utc::now())).await?;
        info!("Created user {:?} with email {}", user.id, user.email);
        Ok(user)
    }

    pub async fn update_user(&self, user_id: i64, draft: UserDraft) -> Result<User, UserCrudError> {
        self.validate(&draft)?;

        let mut user = self.storage.get_user(user_id).await?.ok_or_else(|| {
            warn!("Update rejected, user {} not found", user_id);
            UserCrudError::UserNotFound(user_id)
        })?;

        if user.email != draft.email {
            let holder = self.storage.get_user_by_email(&draft.email).await?;
            if holder.is_some_and(|other| other.id != Some(user_id)) {
                warn!("Update of user {} rejected, email {} already exists", user_id, draft.email);
                return Err(UserCrudError::EmailAlreadyExists(draft.email));
            }
        }

        user.apply(draft, Utc::now());
        let user = self.storage.save_user(user).await?;
        info!("Updated user {}", user_id);
        Ok(user)
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), UserCrudError> {
        if self.storage.get_user(user_id).await?.is_none() {
            warn!("Delete rejected, user {} not found", user_id);
            return Err(UserCrudError::UserNotFound(user_id));
        }

        if !self.storage.delete_user(user_id).await? {
            return Err(UserCrudError::UserNotFound(user_id));
        }
        info!("Deleted user {}", user_id);
        Ok(())
    }
}
