use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::{construct_token, encrypt, new_id, new_token};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use uuid::Uuid;

pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup: create the account row.
    pub async fn create_user(&self, payload: NewUser) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let uid = new_id();
        let now = Utc::now();
        let txn = self.db.begin().await?;

        User::insert(UserActive {
            id: Set(uid),
            email: Set(payload.email),
            username: Set(payload.username),
            avatar_url: Set(None),
            password_hash: Set(payload.password_hash),
            token_hash: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        self.get_user_by_id(&uid).await
    }

    /// Rotate the session secret and hand back the composite bearer token.
    /// Any previously issued token for this user stops resolving.
    pub async fn issue_session_token(&self, user_id: &Uuid) -> Result<String, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        let secret = new_token();
        let encrypted = encrypt(&secret)
            .map_err(|_| AppError::Internal("Failed to hash session token".into()))?;
        let mut am: UserActive = user.into();
        am.token_hash = Set(Some(encrypted));
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await?;
        Ok(construct_token(user_id, &secret))
    }

    /// Sign-out: drop the stored secret so the old token stops resolving.
    pub async fn clear_session_token(&self, user_id: &Uuid) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        am.token_hash = Set(None);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }

    pub async fn update_profile(
        &self,
        user_id: &Uuid,
        username: Option<String>,
        avatar_url: Option<Option<String>>,
    ) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        if let Some(name) = username {
            am.username = Set(name);
        }
        if let Some(url) = avatar_url {
            am.avatar_url = Set(url);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    /// Administrative listing: every registered account.
    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn count_users(&self) -> Result<u64, AppError> {
        Ok(User::find().count(&self.db).await?)
    }

    /// Permanent. Startup rows owned by this user are left in place.
    pub async fn delete_user(&self, user_id: &Uuid) -> Result<(), AppError> {
        let res = User::delete_by_id(*user_id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
