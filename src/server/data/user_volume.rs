//! Per-user volume ownership and notification bookkeeping.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, JoinType, QueryFilter, QuerySelect, RelationTrait,
    TransactionTrait,
};

use crate::server::model::library::VolumeProgress;

pub struct UserVolumeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserVolumeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's ownership rows for the volumes of one title.
    ///
    /// Volumes without a row are not included; callers treat them as not owned.
    ///
    /// # Returns
    /// - `Ok(HashMap<volume_id, owned>)` - Stored ownership flags
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_title(
        &self,
        user_id: i32,
        title_id: i32,
    ) -> Result<HashMap<i32, bool>, DbErr> {
        let rows = entity::prelude::UserVolume::find()
            .join(
                JoinType::InnerJoin,
                entity::user_volume::Relation::Volume.def(),
            )
            .filter(entity::user_volume::Column::UserId.eq(user_id))
            .filter(entity::volume::Column::TitleId.eq(title_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| (r.volume_id, r.owned)).collect())
    }

    /// Upserts ownership flags in one transaction, leaving `notified` untouched.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the rows
    /// - `entries` - Volume IDs with their new ownership flag
    ///
    /// # Returns
    /// - `Ok(())` - Every entry stored
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn set_owned(&self, user_id: i32, entries: &[VolumeProgress]) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        for entry in entries {
            match find_row(&txn, user_id, entry.volume_id).await? {
                Some(row) => {
                    if row.owned != entry.owned {
                        let mut active = row.into_active_model();
                        active.owned = ActiveValue::Set(entry.owned);
                        active.updated_at = ActiveValue::Set(Utc::now());
                        active.update(&txn).await?;
                    }
                }
                None => {
                    insert_row(&txn, user_id, entry.volume_id, entry.owned, false).await?;
                }
            }
        }

        txn.commit().await?;

        Ok(())
    }

    /// Records that the user was emailed about a volume.
    ///
    /// Creates the row with `owned = false` when the user never tracked the volume.
    pub async fn mark_notified(&self, user_id: i32, volume_id: i32) -> Result<(), DbErr> {
        match find_row(self.db, user_id, volume_id).await? {
            Some(row) => {
                let mut active = row.into_active_model();
                active.notified = ActiveValue::Set(true);
                active.updated_at = ActiveValue::Set(Utc::now());
                active.update(self.db).await?;
            }
            None => {
                insert_row(self.db, user_id, volume_id, false, true).await?;
            }
        }

        Ok(())
    }

    /// Gets `(user_id, volume_id)` pairs already notified among the given volumes.
    pub async fn notified_pairs(&self, volume_ids: &[i32]) -> Result<HashSet<(i32, i32)>, DbErr> {
        if volume_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let rows = entity::prelude::UserVolume::find()
            .filter(entity::user_volume::Column::VolumeId.is_in(volume_ids.to_vec()))
            .filter(entity::user_volume::Column::Notified.eq(true))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| (r.user_id, r.volume_id)).collect())
    }

    /// Counts owned volumes per title for a user.
    ///
    /// # Returns
    /// - `Ok(HashMap<title_id, owned_count>)` - Only titles with at least one owned volume
    /// - `Err(DbErr)` - Database error during query
    pub async fn owned_counts_by_title(&self, user_id: i32) -> Result<HashMap<i32, u64>, DbErr> {
        let volumes = entity::prelude::Volume::find()
            .join(
                JoinType::InnerJoin,
                entity::volume::Relation::UserVolume.def(),
            )
            .filter(entity::user_volume::Column::UserId.eq(user_id))
            .filter(entity::user_volume::Column::Owned.eq(true))
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for volume in volumes {
            *counts.entry(volume.title_id).or_insert(0) += 1;
        }

        Ok(counts)
    }
}

async fn find_row<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    volume_id: i32,
) -> Result<Option<entity::user_volume::Model>, DbErr> {
    entity::prelude::UserVolume::find()
        .filter(entity::user_volume::Column::UserId.eq(user_id))
        .filter(entity::user_volume::Column::VolumeId.eq(volume_id))
        .one(db)
        .await
}

async fn insert_row<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    volume_id: i32,
    owned: bool,
    notified: bool,
) -> Result<entity::user_volume::Model, DbErr> {
    let now = Utc::now();
    entity::user_volume::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        volume_id: ActiveValue::Set(volume_id),
        owned: ActiveValue::Set(owned),
        notified: ActiveValue::Set(notified),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
