use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::message::{ActiveModel as MessageActive, Entity as Message, Model as MessageModel};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_message(
        &self,
        user_id: Uuid,
        text: String,
    ) -> Result<MessageModel, AppError> {
        Ok(MessageActive {
            id: Set(Uuid::new_v4()),
            text: Set(text),
            created_at: Set(Utc::now()),
            user_id: Set(user_id),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_message(&self, id: Uuid) -> Result<MessageModel, AppError> {
        Ok(Message::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Message does not exist".into()))?)
    }

    /// Back-reference: the user owning `message`.
    pub async fn get_message_author(&self, message: &MessageModel) -> Result<UserModel, AppError> {
        Ok(message
            .find_related(User)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Message owner does not exist".into()))?)
    }

    pub async fn list_messages_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<MessageModel>, AppError> {
        Ok(Message::find()
            .filter(entity::message::Column::UserId.eq(user_id))
            .order_by_desc(entity::message::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    /// Messages from the user and everyone they follow, newest first.
    pub async fn timeline_for(&self, user_id: Uuid) -> Result<Vec<MessageModel>, AppError> {
        let mut author_ids: Vec<Uuid> = self
            .list_following(user_id)
            .await?
            .into_iter()
            .map(|user| user.id)
            .collect();
        author_ids.push(user_id);

        Ok(Message::find()
            .filter(entity::message::Column::UserId.is_in(author_ids))
            .order_by_desc(entity::message::Column::CreatedAt)
            .limit(100)
            .all(&self.db)
            .await?)
    }

    pub async fn delete_message(&self, id: Uuid) -> Result<(), AppError> {
        Message::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
