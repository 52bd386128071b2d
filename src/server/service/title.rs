//! Title and volume management.
//!
//! Adding volumes, directly or through a title update, hands the new volume IDs to the
//! notification dispatcher once the change is committed.

use sea_orm::DatabaseConnection;

use crate::{
    model::title::{CreateTitleDto, NewVolumeDto, UpdateTitleDto, UpdateVolumeDto},
    server::{
        data::{publisher::PublisherRepository, title::TitleRepository, volume::VolumeRepository},
        error::AppError,
        model::{
            title::{
                CreateTitleParam, Title, TitleFilter, TitleWithCount, TitleWithVolumes,
                UpdateTitleParam,
            },
            volume::{NewVolumeParam, UpdateVolumeParam, Volume},
        },
        service::{cover::CoverStorage, notification::NotificationDispatcher},
        util::{
            slug::{slugify, with_suffix},
            validation::Validator,
        },
    },
};

const MAX_NAME_LEN: usize = 200;
const MAX_FIELD_LEN: usize = 100;
const MAX_SYNOPSIS_LEN: usize = 10_000;

pub struct TitleService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a NotificationDispatcher,
    covers: &'a CoverStorage,
}

impl<'a> TitleService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        notifier: &'a NotificationDispatcher,
        covers: &'a CoverStorage,
    ) -> Self {
        Self {
            db,
            notifier,
            covers,
        }
    }

    /// Creates a title with its initial volumes.
    ///
    /// # Returns
    /// - `Ok(TitleWithVolumes)` - Created title
    /// - `Err(AppError::Validation)` - Invalid name, text fields or volume numbers
    /// - `Err(AppError::NotFound)` - Publisher does not exist
    pub async fn create(&self, dto: CreateTitleDto) -> Result<TitleWithVolumes, AppError> {
        let name = dto.name.trim().to_string();
        let synopsis = non_empty(dto.synopsis);
        let author = non_empty(dto.author);
        let genre = non_empty(dto.genre);

        Validator::new()
            .length("name", &name, 1, MAX_NAME_LEN)
            .optional_length("synopsis", synopsis.as_deref(), MAX_SYNOPSIS_LEN)
            .optional_length("author", author.as_deref(), MAX_FIELD_LEN)
            .optional_length("genre", genre.as_deref(), MAX_FIELD_LEN)
            .volume_numbers(dto.volumes.iter().map(|v| v.number))
            .finish()?;

        self.require_publisher(dto.publisher_id).await?;

        let slug = self.unique_slug(&name, None).await?;

        let created = TitleRepository::new(self.db)
            .create(CreateTitleParam {
                name,
                synopsis,
                author,
                genre,
                slug,
                status: dto.status.unwrap_or_default(),
                publisher_id: dto.publisher_id,
                volumes: dto.volumes.into_iter().map(NewVolumeParam::from_dto).collect(),
            })
            .await?;

        Ok(created)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TitleWithVolumes, AppError> {
        let title = self.require_title(id).await?;
        self.with_volumes(title).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<TitleWithVolumes, AppError> {
        let title = TitleRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(title_not_found)?;

        self.with_volumes(title).await
    }

    pub async fn list(&self, filter: TitleFilter) -> Result<Vec<TitleWithCount>, AppError> {
        Ok(TitleRepository::new(self.db).get_all(filter).await?)
    }

    /// Volumes of a title ordered by number.
    pub async fn volumes(&self, title_id: i32) -> Result<Vec<Volume>, AppError> {
        self.require_title(title_id).await?;

        Ok(VolumeRepository::new(self.db).get_by_title(title_id).await?)
    }

    /// Partially updates a title.
    ///
    /// A name change regenerates the slug. When `volumes` is present it replaces the
    /// volume list: new numbers are created and announced to subscribers, existing numbers
    /// are relabeled and missing numbers are deleted along with their cover files.
    ///
    /// # Returns
    /// - `Ok(TitleWithVolumes)` - Updated title with its current volumes
    /// - `Err(AppError::Validation)` - Invalid field values or volume numbers
    /// - `Err(AppError::NotFound)` - Title or new publisher does not exist
    pub async fn update(&self, id: i32, dto: UpdateTitleDto) -> Result<TitleWithVolumes, AppError> {
        let current = self.require_title(id).await?;

        let name = dto.name.map(|n| n.trim().to_string());
        let synopsis = dto.synopsis.map(|s| non_empty(Some(s)));
        let author = dto.author.map(|a| non_empty(Some(a)));
        let genre = dto.genre.map(|g| non_empty(Some(g)));

        let mut validator = Validator::new();
        if let Some(name) = &name {
            validator.length("name", name, 1, MAX_NAME_LEN);
        }
        validator
            .optional_length("synopsis", synopsis.clone().flatten().as_deref(), MAX_SYNOPSIS_LEN)
            .optional_length("author", author.clone().flatten().as_deref(), MAX_FIELD_LEN)
            .optional_length("genre", genre.clone().flatten().as_deref(), MAX_FIELD_LEN);
        if let Some(volumes) = &dto.volumes {
            validator.volume_numbers(volumes.iter().map(|v| v.number));
        }
        validator.finish()?;

        if let Some(publisher_id) = dto.publisher_id {
            self.require_publisher(publisher_id).await?;
        }

        let slug = match &name {
            Some(name) if *name != current.name => Some(self.unique_slug(name, Some(id)).await?),
            _ => None,
        };

        let param = UpdateTitleParam {
            name,
            synopsis,
            author,
            genre,
            slug,
            status: dto.status,
            publisher_id: dto.publisher_id,
        };
        let volumes = dto
            .volumes
            .map(|v| v.into_iter().map(NewVolumeParam::from_dto).collect());

        let (title, sync) = TitleRepository::new(self.db)
            .update(id, param, volumes)
            .await?
            .ok_or_else(title_not_found)?;

        for removed in &sync.removed {
            if let Some(cover) = &removed.cover_image {
                self.covers.remove(cover).await;
            }
        }

        self.notifier
            .dispatch_new_volumes(id, sync.created.iter().map(|v| v.id).collect());

        self.with_volumes(title).await
    }

    /// Adds one volume and announces it to subscribers.
    ///
    /// # Returns
    /// - `Ok(Volume)` - Created volume
    /// - `Err(AppError::NotFound)` - Title does not exist
    /// - `Err(AppError::Conflict)` - The title already has a volume with that number
    pub async fn add_volume(&self, title_id: i32, dto: NewVolumeDto) -> Result<Volume, AppError> {
        self.require_title(title_id).await?;

        let param = NewVolumeParam::from_dto(dto);
        Validator::new()
            .volume_numbers([param.number])
            .optional_length("title", param.title.as_deref(), MAX_NAME_LEN)
            .finish()?;

        let volume_repo = VolumeRepository::new(self.db);
        if volume_repo
            .number_exists(title_id, param.number, None)
            .await?
        {
            return Err(volume_taken(param.number));
        }

        let volume = volume_repo.create(title_id, param).await?;

        self.notifier.dispatch_new_volumes(title_id, vec![volume.id]);

        Ok(volume)
    }

    /// # Returns
    /// - `Ok(Volume)` - Updated volume
    /// - `Err(AppError::NotFound)` - Volume does not exist in that title
    /// - `Err(AppError::Conflict)` - New number already used in the title
    pub async fn update_volume(
        &self,
        title_id: i32,
        volume_id: i32,
        dto: UpdateVolumeDto,
    ) -> Result<Volume, AppError> {
        self.require_volume(title_id, volume_id).await?;

        let param = UpdateVolumeParam::from_dto(dto);
        let mut validator = Validator::new();
        if let Some(number) = param.number {
            validator.volume_numbers([number]);
        }
        validator
            .optional_length("title", param.title.as_deref(), MAX_NAME_LEN)
            .finish()?;

        let volume_repo = VolumeRepository::new(self.db);
        if let Some(number) = param.number {
            if volume_repo
                .number_exists(title_id, number, Some(volume_id))
                .await?
            {
                return Err(volume_taken(number));
            }
        }

        volume_repo
            .update(volume_id, param)
            .await?
            .ok_or_else(volume_not_found)
    }

    pub async fn delete_volume(&self, title_id: i32, volume_id: i32) -> Result<(), AppError> {
        let volume = self.require_volume(title_id, volume_id).await?;

        VolumeRepository::new(self.db).delete(volume_id).await?;

        if let Some(cover) = &volume.cover_image {
            self.covers.remove(cover).await;
        }

        Ok(())
    }

    /// Deletes a title with its volumes and removes their cover files.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let TitleWithVolumes { title, volumes } = self.get_by_id(id).await?;

        TitleRepository::new(self.db).delete(id).await?;

        let covers = title
            .cover_image
            .iter()
            .chain(volumes.iter().filter_map(|v| v.cover_image.as_ref()));
        for cover in covers {
            self.covers.remove(cover).await;
        }

        Ok(())
    }

    /// Stores a new title cover and removes the previous file.
    ///
    /// # Returns
    /// - `Ok(TitleWithVolumes)` - Title with the new cover path
    /// - `Err(AppError::NotFound)` - Title does not exist
    /// - `Err(AppError::UploadErr)` - File rejected or not writable
    pub async fn set_title_cover(
        &self,
        id: i32,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<TitleWithVolumes, AppError> {
        let current = self.require_title(id).await?;

        let path = self.covers.save(content_type, bytes).await?;
        let updated = match TitleRepository::new(self.db)
            .set_cover(id, Some(path.clone()))
            .await
        {
            Ok(Some(title)) => title,
            result => {
                self.covers.remove(&path).await;
                return Err(result.err().map_or_else(title_not_found, AppError::from));
            }
        };

        if let Some(old) = &current.cover_image {
            self.covers.remove(old).await;
        }

        self.with_volumes(updated).await
    }

    /// Stores a new volume cover and removes the previous file.
    pub async fn set_volume_cover(
        &self,
        title_id: i32,
        volume_id: i32,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<Volume, AppError> {
        let current = self.require_volume(title_id, volume_id).await?;

        let path = self.covers.save(content_type, bytes).await?;
        let updated = match VolumeRepository::new(self.db)
            .set_cover(volume_id, Some(path.clone()))
            .await
        {
            Ok(Some(volume)) => volume,
            result => {
                self.covers.remove(&path).await;
                return Err(result.err().map_or_else(volume_not_found, AppError::from));
            }
        };

        if let Some(old) = &current.cover_image {
            self.covers.remove(old).await;
        }

        Ok(updated)
    }

    async fn with_volumes(&self, title: Title) -> Result<TitleWithVolumes, AppError> {
        let volumes = VolumeRepository::new(self.db).get_by_title(title.id).await?;

        Ok(TitleWithVolumes { title, volumes })
    }

    async fn require_title(&self, id: i32) -> Result<Title, AppError> {
        TitleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(title_not_found)
    }

    async fn require_volume(&self, title_id: i32, volume_id: i32) -> Result<Volume, AppError> {
        match VolumeRepository::new(self.db).find_by_id(volume_id).await? {
            Some(volume) if volume.title_id == title_id => Ok(volume),
            _ => Err(volume_not_found()),
        }
    }

    async fn require_publisher(&self, publisher_id: i32) -> Result<(), AppError> {
        match PublisherRepository::new(self.db)
            .find_by_id(publisher_id)
            .await?
        {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Publisher not found".to_string())),
        }
    }

    /// Slug of `name`, suffixed with `-2`, `-3`, ... until no other title uses it.
    async fn unique_slug(&self, name: &str, exclude_id: Option<i32>) -> Result<String, AppError> {
        let repo = TitleRepository::new(self.db);
        let base = slugify(name);

        let mut n = 1;
        loop {
            let candidate = with_suffix(&base, n);
            if !repo.slug_exists(&candidate, exclude_id).await? {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn title_not_found() -> AppError {
    AppError::NotFound("Title not found".to_string())
}

fn volume_not_found() -> AppError {
    AppError::NotFound("Volume not found".to_string())
}

fn volume_taken(number: i32) -> AppError {
    AppError::Conflict(format!("Volume {} already exists for this title", number))
}
