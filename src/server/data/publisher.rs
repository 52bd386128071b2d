//! Publisher data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::publisher::{CreatePublisherParam, Publisher, UpdatePublisherParam};

pub struct PublisherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublisherRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new publisher.
    ///
    /// # Returns
    /// - `Ok(Publisher)` - The created publisher
    /// - `Err(DbErr)` - Database error, including unique violation on name
    pub async fn create(&self, param: CreatePublisherParam) -> Result<Publisher, DbErr> {
        let now = Utc::now();
        let entity = entity::publisher::ActiveModel {
            name: ActiveValue::Set(param.name),
            country: ActiveValue::Set(param.country),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Publisher::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Publisher>, DbErr> {
        let entity = entity::prelude::Publisher::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Publisher::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Publisher>, DbErr> {
        let entity = entity::prelude::Publisher::find()
            .filter(entity::publisher::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Publisher::from_entity))
    }

    /// Gets every publisher ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Publisher>, DbErr> {
        let entities = entity::prelude::Publisher::find()
            .order_by_asc(entity::publisher::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Publisher::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Publisher))` - The updated publisher
    /// - `Ok(None)` - No publisher with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdatePublisherParam,
    ) -> Result<Option<Publisher>, DbErr> {
        let Some(entity) = entity::prelude::Publisher::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(country) = param.country {
            active.country = ActiveValue::Set(Some(country));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Publisher::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Publisher::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts titles referencing the publisher.
    pub async fn count_titles(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Title::find()
            .filter(entity::title::Column::PublisherId.eq(id))
            .count(self.db)
            .await
    }
}
