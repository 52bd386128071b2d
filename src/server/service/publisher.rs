//! Publisher management.

use sea_orm::DatabaseConnection;

use crate::{
    model::publisher::{CreatePublisherDto, UpdatePublisherDto},
    server::{
        data::publisher::PublisherRepository,
        error::AppError,
        model::publisher::{CreatePublisherParam, Publisher, UpdatePublisherParam},
        util::validation::Validator,
    },
};

const MAX_NAME_LEN: usize = 100;

pub struct PublisherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublisherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Publisher>, AppError> {
        Ok(PublisherRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Publisher, AppError> {
        PublisherRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a publisher.
    ///
    /// # Returns
    /// - `Ok(Publisher)` - Created publisher
    /// - `Err(AppError::Validation)` - Empty or overlong name
    /// - `Err(AppError::Conflict)` - Another publisher already has the name
    pub async fn create(&self, dto: CreatePublisherDto) -> Result<Publisher, AppError> {
        let param = CreatePublisherParam::from_dto(dto);

        Validator::new()
            .length("name", &param.name, 1, MAX_NAME_LEN)
            .optional_length("country", param.country.as_deref(), MAX_NAME_LEN)
            .finish()?;

        let repo = PublisherRepository::new(self.db);
        if repo.find_by_name(&param.name).await?.is_some() {
            return Err(name_taken(&param.name));
        }

        Ok(repo.create(param).await?)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Publisher)` - Updated publisher
    /// - `Err(AppError::NotFound)` - No publisher with that ID
    /// - `Err(AppError::Conflict)` - The new name belongs to another publisher
    pub async fn update(&self, id: i32, dto: UpdatePublisherDto) -> Result<Publisher, AppError> {
        let param = UpdatePublisherParam::from_dto(dto);

        let mut validator = Validator::new();
        if let Some(name) = &param.name {
            validator.length("name", name, 1, MAX_NAME_LEN);
        }
        validator
            .optional_length("country", param.country.as_deref(), MAX_NAME_LEN)
            .finish()?;

        let repo = PublisherRepository::new(self.db);
        if let Some(name) = &param.name {
            if let Some(existing) = repo.find_by_name(name).await? {
                if existing.id != id {
                    return Err(name_taken(name));
                }
            }
        }

        repo.update(id, param).await?.ok_or_else(not_found)
    }

    /// Deletes a publisher that no longer has titles.
    ///
    /// # Returns
    /// - `Ok(())` - Publisher deleted
    /// - `Err(AppError::NotFound)` - No publisher with that ID
    /// - `Err(AppError::Conflict)` - Titles still reference the publisher
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = PublisherRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found());
        }

        let titles = repo.count_titles(id).await?;
        if titles > 0 {
            return Err(AppError::Conflict(format!(
                "Publisher still has {} title(s) and cannot be deleted",
                titles
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Publisher not found".to_string())
}

fn name_taken(name: &str) -> AppError {
    AppError::Conflict(format!("Publisher '{}' already exists", name))
}
