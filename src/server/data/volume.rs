//! Volume data repository.
//!
//! The free functions take any `ConnectionTrait` so title operations can reuse them
//! inside a transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::volume::{NewVolumeParam, UpdateVolumeParam, Volume};

pub struct VolumeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VolumeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a volume into a title.
    ///
    /// # Returns
    /// - `Ok(Volume)` - The created volume
    /// - `Err(DbErr)` - Database error, including unique violation on (title, number)
    pub async fn create(&self, title_id: i32, param: NewVolumeParam) -> Result<Volume, DbErr> {
        let entity = insert_volume(self.db, title_id, param).await?;

        Ok(Volume::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Volume>, DbErr> {
        let entity = entity::prelude::Volume::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Volume::from_entity))
    }

    /// Gets the volumes of a title ordered by number.
    pub async fn get_by_title(&self, title_id: i32) -> Result<Vec<Volume>, DbErr> {
        let entities = volumes_of_title(self.db, title_id).await?;

        Ok(entities.into_iter().map(Volume::from_entity).collect())
    }

    /// Gets the listed volumes of a title, ignoring IDs that belong elsewhere.
    pub async fn get_by_ids(&self, title_id: i32, ids: &[i32]) -> Result<Vec<Volume>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Volume::find()
            .filter(entity::volume::Column::TitleId.eq(title_id))
            .filter(entity::volume::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::volume::Column::Number)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Volume::from_entity).collect())
    }

    pub async fn count_by_title(&self, title_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Volume::find()
            .filter(entity::volume::Column::TitleId.eq(title_id))
            .count(self.db)
            .await
    }

    /// Checks whether a title already has a volume with this number.
    ///
    /// # Arguments
    /// - `title_id` - Title to look in
    /// - `number` - Volume number
    /// - `exclude_id` - Volume to ignore, used when renumbering that volume
    pub async fn number_exists(
        &self,
        title_id: i32,
        number: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Volume::find()
            .filter(entity::volume::Column::TitleId.eq(title_id))
            .filter(entity::volume::Column::Number.eq(number));

        if let Some(id) = exclude_id {
            query = query.filter(entity::volume::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Volume))` - The updated volume
    /// - `Ok(None)` - No volume with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateVolumeParam) -> Result<Option<Volume>, DbErr> {
        let Some(entity) = entity::prelude::Volume::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(number) = param.number {
            active.number = ActiveValue::Set(number);
        }
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(Some(title));
        }
        if let Some(release_at) = param.release_at {
            active.release_at = ActiveValue::Set(Some(release_at));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Volume::from_entity(entity)))
    }

    /// Replaces the stored cover path.
    ///
    /// # Returns
    /// - `Ok(Some(Volume))` - Updated volume
    /// - `Ok(None)` - No volume with that ID
    pub async fn set_cover(&self, id: i32, cover: Option<String>) -> Result<Option<Volume>, DbErr> {
        let Some(entity) = entity::prelude::Volume::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.cover_image = ActiveValue::Set(cover);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Volume::from_entity(active.update(self.db).await?)))
    }

    /// Deletes a volume; ownership rows cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Volume::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

pub(super) async fn insert_volume<C: ConnectionTrait>(
    db: &C,
    title_id: i32,
    param: NewVolumeParam,
) -> Result<entity::volume::Model, DbErr> {
    let now = Utc::now();
    entity::volume::ActiveModel {
        title_id: ActiveValue::Set(title_id),
        number: ActiveValue::Set(param.number),
        title: ActiveValue::Set(param.title),
        cover_image: ActiveValue::Set(None),
        release_at: ActiveValue::Set(param.release_at),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub(super) async fn volumes_of_title<C: ConnectionTrait>(
    db: &C,
    title_id: i32,
) -> Result<Vec<entity::volume::Model>, DbErr> {
    entity::prelude::Volume::find()
        .filter(entity::volume::Column::TitleId.eq(title_id))
        .order_by_asc(entity::volume::Column::Number)
        .all(db)
        .await
}
