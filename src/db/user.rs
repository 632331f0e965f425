use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::NewUser};
use crate::utils::password;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// Hashes the plaintext password and builds a user row that has not been
/// persisted yet. Username/email uniqueness is enforced by the database
/// constraints on insert, not here.
pub fn signup(new_user: NewUser) -> Result<UserActive, AppError> {
    let now = Utc::now();
    Ok(UserActive {
        id: Set(Uuid::new_v4()),
        username: Set(new_user.username),
        email: Set(new_user.email),
        password_hash: Set(password::hash(&new_user.password)?),
        image_url: Set(new_user.image_url),
        created_at: Set(now),
        updated_at: Set(now),
    })
}

impl PostgresService {
    /// Persists a row built by [`signup`]. A username or email collision
    /// surfaces as `AppError::AlreadyExists`.
    pub async fn insert_user(&self, user: UserActive) -> Result<UserModel, AppError> {
        Ok(user.insert(&self.db).await?)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    /// Some(user) iff the username exists and the password verifies against
    /// the stored hash. Both failure cases look the same to the caller.
    pub async fn authenticate(
        &self,
        username: &str,
        password_input: &str,
    ) -> Result<Option<UserModel>, AppError> {
        let Some(user) = self.get_user_by_username(username).await? else {
            return Ok(None);
        };
        if password::verify(password_input, &user.password_hash) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Messages and follow edges go with the row (FK cascade).
    pub async fn delete_user(&self, id: Uuid) -> Result<(), AppError> {
        User::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
