use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::follow::{ActiveModel as FollowActive, Column, Entity as Follow};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

impl PostgresService {
    /// True iff `follower` follows `followed`.
    pub async fn is_following(&self, follower: Uuid, followed: Uuid) -> Result<bool, AppError> {
        Ok(Follow::find()
            .filter(Column::UserFollowingId.eq(follower))
            .filter(Column::UserBeingFollowedId.eq(followed))
            .count(&self.db)
            .await?
            > 0)
    }

    /// True iff `other` follows `user`.
    pub async fn is_followed_by(&self, user: Uuid, other: Uuid) -> Result<bool, AppError> {
        self.is_following(other, user).await
    }

    pub async fn follow_user(&self, follower: Uuid, followed: Uuid) -> Result<(), AppError> {
        let inserted = Follow::insert(FollowActive {
            user_being_followed_id: Set(followed),
            user_following_id: Set(follower),
            created_at: Set(Utc::now()),
        })
        .exec(&self.db)
        .await;

        match inserted.map_err(AppError::from) {
            Ok(_) => Ok(()),
            // composite PK: re-following an already-followed user is a no-op
            Err(AppError::AlreadyExists) => Ok(()),
            Err(e) => Err(e),
        }
    }

    pub async fn unfollow_user(&self, follower: Uuid, followed: Uuid) -> Result<(), AppError> {
        Follow::delete_many()
            .filter(Column::UserFollowingId.eq(follower))
            .filter(Column::UserBeingFollowedId.eq(followed))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    pub async fn list_followers(&self, user_id: Uuid) -> Result<Vec<UserModel>, AppError> {
        let follower_ids: Vec<Uuid> = Follow::find()
            .filter(Column::UserBeingFollowedId.eq(user_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|edge| edge.user_following_id)
            .collect();

        if follower_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(User::find()
            .filter(entity::user::Column::Id.is_in(follower_ids))
            .all(&self.db)
            .await?)
    }

    pub async fn list_following(&self, user_id: Uuid) -> Result<Vec<UserModel>, AppError> {
        let followed_ids: Vec<Uuid> = Follow::find()
            .filter(Column::UserFollowingId.eq(user_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|edge| edge.user_being_followed_id)
            .collect();

        if followed_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(User::find()
            .filter(entity::user::Column::Id.is_in(followed_ids))
            .all(&self.db)
            .await?)
    }
}
