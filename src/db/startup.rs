use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::startup::{
    ActiveModel as StartupActive, Column, Entity as Startup, Model as StartupModel, Visibility,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use uuid::Uuid;

pub struct NewStartup {
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub visibility: Visibility,
}

#[derive(Default)]
pub struct StartupPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Some(None) clears the image, None leaves it untouched.
    pub image_url: Option<Option<String>>,
    pub visibility: Option<Visibility>,
}

impl StartupPatch {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.visibility.is_none()
    }
}

impl PostgresService {
    pub async fn get_startup(&self, id: &Uuid) -> Result<StartupModel, AppError> {
        Ok(Startup::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Startup does not exist".into()))?)
    }

    /// Owner's rows, newest first, id as the stable tie-break.
    pub async fn list_startups_by_owner(&self, owner: &Uuid) -> Result<Vec<StartupModel>, AppError> {
        Ok(Startup::find()
            .filter(Column::UserId.eq(*owner))
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Showcase rows: visibility = public only, newest first.
    pub async fn list_public_startups(&self) -> Result<Vec<StartupModel>, AppError> {
        Ok(Startup::find()
            .filter(Column::Visibility.eq(Visibility::Public))
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn list_all_startups(&self) -> Result<Vec<StartupModel>, AppError> {
        Ok(Startup::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn count_startups(&self) -> Result<u64, AppError> {
        Ok(Startup::find().count(&self.db).await?)
    }

    pub async fn create_startup(&self, payload: NewStartup) -> Result<StartupModel, AppError> {
        let sid = new_id();
        let now = Utc::now();
        let txn = self.db.begin().await?;

        Startup::insert(StartupActive {
            id: Set(sid),
            user_id: Set(payload.user_id),
            name: Set(payload.name),
            description: Set(payload.description),
            image_url: Set(payload.image_url),
            visibility: Set(payload.visibility),
            created_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        self.get_startup(&sid).await
    }

    pub async fn update_startup(
        &self,
        id: &Uuid,
        patch: StartupPatch,
    ) -> Result<StartupModel, AppError> {
        let current = self.get_startup(id).await?;
        if patch.is_empty() {
            return Ok(current);
        }

        let mut am: StartupActive = current.into();
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(description) = patch.description {
            am.description = Set(description);
        }
        if let Some(image_url) = patch.image_url {
            am.image_url = Set(image_url);
        }
        if let Some(visibility) = patch.visibility {
            am.visibility = Set(visibility);
        }
        Ok(am.update(&self.db).await?)
    }

    /// Read the current flag, write the opposite. Two racing toggles can
    /// land in either order; per-row UPDATE semantics are the only
    /// guarantee here.
    pub async fn toggle_startup_visibility(&self, id: &Uuid) -> Result<StartupModel, AppError> {
        let current = self.get_startup(id).await?;
        let next = current.visibility.toggled();
        let mut am: StartupActive = current.into();
        am.visibility = Set(next);
        Ok(am.update(&self.db).await?)
    }

    /// Permanent, no tombstone.
    pub async fn delete_startup(&self, id: &Uuid) -> Result<(), AppError> {
        let res = Startup::delete_by_id(*id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
