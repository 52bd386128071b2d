//! Title data repository.
//!
//! Creating a title with its volumes and replacing a title's volume list each run in a
//! single transaction, so a failed volume insert leaves no partial title behind.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, IntoActiveModel, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::{
    data::volume::{insert_volume, volumes_of_title},
    model::{
        title::{
            CreateTitleParam, Title, TitleFilter, TitleWithCount, TitleWithVolumes,
            UpdateTitleParam,
        },
        volume::{NewVolumeParam, Volume, VolumeSync},
    },
};

pub struct TitleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TitleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a title and its initial volumes in one transaction.
    ///
    /// # Arguments
    /// - `param` - Validated title fields, unique slug and volumes
    ///
    /// # Returns
    /// - `Ok(TitleWithVolumes)` - The created title with volumes ordered by number
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, param: CreateTitleParam) -> Result<TitleWithVolumes, DbErr> {
        let txn = self.db.begin().await?;

        let now = Utc::now();
        let title = entity::title::ActiveModel {
            name: ActiveValue::Set(param.name),
            synopsis: ActiveValue::Set(param.synopsis),
            author: ActiveValue::Set(param.author),
            genre: ActiveValue::Set(param.genre),
            slug: ActiveValue::Set(param.slug),
            cover_image: ActiveValue::Set(None),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            publisher_id: ActiveValue::Set(param.publisher_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut volumes = Vec::with_capacity(param.volumes.len());
        for volume in param.volumes {
            volumes.push(Volume::from_entity(insert_volume(&txn, title.id, volume).await?));
        }
        volumes.sort_by_key(|v| v.number);

        txn.commit().await?;

        Ok(TitleWithVolumes {
            title: Title::from_entity(title)?,
            volumes,
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Title>, DbErr> {
        entity::prelude::Title::find_by_id(id)
            .one(self.db)
            .await?
            .map(Title::from_entity)
            .transpose()
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Title>, DbErr> {
        entity::prelude::Title::find()
            .filter(entity::title::Column::Slug.eq(slug))
            .one(self.db)
            .await?
            .map(Title::from_entity)
            .transpose()
    }

    /// Checks whether a slug is taken.
    ///
    /// # Arguments
    /// - `slug` - Candidate slug
    /// - `exclude_id` - Title whose own slug does not count, used when renaming
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Title::find().filter(entity::title::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::title::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Lists titles matching the filter, newest first, each with its volume count.
    ///
    /// # Arguments
    /// - `filter` - Optional status, publisher and name search; blank search is ignored
    ///
    /// # Returns
    /// - `Ok(Vec<TitleWithCount>)` - Matching titles
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, filter: TitleFilter) -> Result<Vec<TitleWithCount>, DbErr> {
        let mut query = entity::prelude::Title::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::title::Column::Status.eq(status.as_str()));
        }
        if let Some(publisher_id) = filter.publisher_id {
            query = query.filter(entity::title::Column::PublisherId.eq(publisher_id));
        }
        if let Some(search) = filter.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                // LOWER on both sides; Postgres LIKE is case-sensitive.
                let name = Func::lower(Expr::col((
                    entity::title::Entity,
                    entity::title::Column::Name,
                )));
                query = query.filter(
                    Expr::expr(name).like(format!("%{}%", search.to_lowercase())),
                );
            }
        }

        let entities = query
            .order_by_desc(entity::title::Column::CreatedAt)
            .order_by_desc(entity::title::Column::Id)
            .all(self.db)
            .await?;

        let mut titles = Vec::with_capacity(entities.len());
        for entity in entities {
            let volume_count = entity::prelude::Volume::find()
                .filter(entity::volume::Column::TitleId.eq(entity.id))
                .count(self.db)
                .await?;

            titles.push(TitleWithCount {
                title: Title::from_entity(entity)?,
                volume_count,
            });
        }

        Ok(titles)
    }

    /// Gets the titles with the given IDs keyed by ID.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, Title>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        entity::prelude::Title::find()
            .filter(entity::title::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| Title::from_entity(e).map(|t| (t.id, t)))
            .collect()
    }

    /// Applies a partial update and optionally replaces the volume list, in one transaction.
    ///
    /// When `volumes` is `Some`, it is the complete desired list: numbers not stored yet are
    /// inserted, stored numbers get the given label (and release date when provided), and
    /// stored volumes whose number is absent are deleted.
    ///
    /// # Returns
    /// - `Ok(Some((Title, VolumeSync)))` - Updated title and the volume changes made
    /// - `Ok(None)` - No title with that ID
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn update(
        &self,
        id: i32,
        param: UpdateTitleParam,
        volumes: Option<Vec<NewVolumeParam>>,
    ) -> Result<Option<(Title, VolumeSync)>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Title::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(slug) = param.slug {
            active.slug = ActiveValue::Set(slug);
        }
        if let Some(synopsis) = param.synopsis {
            active.synopsis = ActiveValue::Set(synopsis);
        }
        if let Some(author) = param.author {
            active.author = ActiveValue::Set(author);
        }
        if let Some(genre) = param.genre {
            active.genre = ActiveValue::Set(genre);
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(publisher_id) = param.publisher_id {
            active.publisher_id = ActiveValue::Set(publisher_id);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(&txn).await?;

        let mut sync = VolumeSync::default();
        if let Some(desired) = volumes {
            let mut existing: HashMap<i32, entity::volume::Model> =
                volumes_of_title(&txn, id)
                    .await?
                    .into_iter()
                    .map(|v| (v.number, v))
                    .collect();

            for wanted in desired {
                match existing.remove(&wanted.number) {
                    Some(stored) => {
                        let mut active = stored.into_active_model();
                        active.title = ActiveValue::Set(wanted.title);
                        if let Some(release_at) = wanted.release_at {
                            active.release_at = ActiveValue::Set(Some(release_at));
                        }
                        active.updated_at = ActiveValue::Set(Utc::now());
                        sync.updated
                            .push(Volume::from_entity(active.update(&txn).await?));
                    }
                    None => {
                        let created = insert_volume(&txn, id, wanted).await?;
                        sync.created.push(Volume::from_entity(created));
                    }
                }
            }

            for (_, stale) in existing {
                let volume = Volume::from_entity(stale.clone());
                stale.delete(&txn).await?;
                sync.removed.push(volume);
            }

            sync.created.sort_by_key(|v| v.number);
            sync.updated.sort_by_key(|v| v.number);
            sync.removed.sort_by_key(|v| v.number);
        }

        txn.commit().await?;

        Ok(Some((Title::from_entity(entity)?, sync)))
    }

    /// Replaces the stored cover path.
    ///
    /// # Returns
    /// - `Ok(Some(Title))` - Updated title
    /// - `Ok(None)` - No title with that ID
    pub async fn set_cover(&self, id: i32, cover: Option<String>) -> Result<Option<Title>, DbErr> {
        let Some(entity) = entity::prelude::Title::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.cover_image = ActiveValue::Set(cover);
        active.updated_at = ActiveValue::Set(Utc::now());

        Title::from_entity(active.update(self.db).await?).map(Some)
    }

    /// Deletes a title. Volumes, ownership rows and notification preferences cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Title::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
