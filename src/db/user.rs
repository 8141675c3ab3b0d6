use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use crate::utils::token::new_id;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// Signup: existence check, then a timestamped insert. The check and
    /// the insert are not atomic across requests; the unique index on
    /// email settles races (the violation maps to `AlreadyExists`).
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let uid = new_id();
        let now = Utc::now();
        let txn = self.db.begin().await?;

        User::insert(UserActive {
            id: Set(uid),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(uid)
    }
}
