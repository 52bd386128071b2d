use std::sync::Arc;

use chrono::{TimeZone, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{title::TitleStatus, user::Role},
    server::{
        config::{BootstrapAdmin, Config},
        data::{
            publisher::PublisherRepository, title::TitleRepository, user::UserRepository,
            user_volume::UserVolumeRepository,
        },
        error::AppError,
        model::{
            library::VolumeProgress, publisher::CreatePublisherParam, title::CreateTitleParam,
            user::CreateUserParam, volume::NewVolumeParam,
        },
        service::{
            auth::{normalize_email, password::hash_password},
            cover::CoverStorage,
            notification::mailer::{Mailer, SmtpMailer},
        },
    },
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up to date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Makes sure at least one admin account exists.
///
/// When no user has the `ADMIN` role, the bootstrap account from configuration is
/// created, or promoted if its email is already registered. Without bootstrap
/// credentials a warning is logged and the server starts without an admin.
///
/// # Returns
/// - `Ok(())` - An admin exists or none could be created
/// - `Err(AppError)` - Database or password hashing failure
pub async fn ensure_admin(
    db: &DatabaseConnection,
    bootstrap: Option<&BootstrapAdmin>,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let Some(bootstrap) = bootstrap else {
        tracing::warn!(
            "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one on startup"
        );
        return Ok(());
    };

    let email = normalize_email(&bootstrap.email);
    let user = match user_repo.find_by_email(&email).await? {
        Some(user) => user,
        None => {
            let password_hash = hash_password(bootstrap.password.clone()).await?;
            user_repo
                .create(CreateUserParam {
                    name: bootstrap.name.clone(),
                    email,
                    password_hash,
                    role: Role::User,
                })
                .await?
        }
    };

    user_repo.add_role(user.id, Role::Admin).await?;

    tracing::info!("Granted admin role to bootstrap account {}", user.email);

    Ok(())
}

pub const DEMO_READER_EMAIL: &str = "reader@kushon.local";
const DEMO_READER_PASSWORD: &str = "reader123";

/// Fills an empty catalog with demo data.
///
/// Creates one publisher, one title with two volumes and a reader account that owns
/// the first volume and was already notified about the second. Does nothing when any
/// publisher exists, so restarting with `SEED_DEMO=true` is harmless.
///
/// # Returns
/// - `Ok(true)` - Demo data inserted
/// - `Ok(false)` - The catalog already had data
/// - `Err(AppError)` - Database or password hashing failure
pub async fn seed_demo(db: &DatabaseConnection) -> Result<bool, AppError> {
    let publisher_repo = PublisherRepository::new(db);
    if !publisher_repo.get_all().await?.is_empty() {
        tracing::info!("Catalog already has data, skipping demo seed");
        return Ok(false);
    }

    let publisher = publisher_repo
        .create(CreatePublisherParam {
            name: "Shogakukan".to_string(),
            country: Some("Japan".to_string()),
        })
        .await?;

    let release = |month| Utc.with_ymd_and_hms(2023, month, 15, 0, 0, 0).single();
    let seeded = TitleRepository::new(db)
        .create(CreateTitleParam {
            name: "One Piece".to_string(),
            synopsis: Some(
                "Monkey D. Luffy wants to become King of the Pirates. With his crew he sails \
                 the Grand Line in search of the legendary treasure known as the One Piece."
                    .to_string(),
            ),
            author: Some("Eiichiro Oda".to_string()),
            genre: Some("Adventure, Shonen".to_string()),
            slug: "one-piece".to_string(),
            status: TitleStatus::Ongoing,
            publisher_id: publisher.id,
            volumes: (1..=2)
                .map(|number| NewVolumeParam {
                    number,
                    title: Some(format!("One Piece Vol. {}", number)),
                    release_at: release(number as u32),
                })
                .collect(),
        })
        .await?;

    let user_repo = UserRepository::new(db);
    let reader = match user_repo.find_by_email(DEMO_READER_EMAIL).await? {
        Some(user) => user,
        None => {
            let password_hash = hash_password(DEMO_READER_PASSWORD.to_string()).await?;
            user_repo
                .create(CreateUserParam {
                    name: "Demo Reader".to_string(),
                    email: DEMO_READER_EMAIL.to_string(),
                    password_hash,
                    role: Role::User,
                })
                .await?
        }
    };

    let progress: Vec<VolumeProgress> = seeded
        .volumes
        .iter()
        .map(|volume| VolumeProgress {
            volume_id: volume.id,
            owned: volume.number == 1,
        })
        .collect();
    let user_volumes = UserVolumeRepository::new(db);
    user_volumes.set_owned(reader.id, &progress).await?;
    for volume in seeded.volumes.iter().filter(|v| v.number == 2) {
        user_volumes.mark_notified(reader.id, volume.id).await?;
    }

    tracing::info!(
        "Seeded demo title '{}' with {} volumes and reader {}",
        seeded.title.name,
        seeded.volumes.len(),
        reader.email
    );

    Ok(true)
}

/// Builds the SMTP mailer used for new volume notifications.
pub fn setup_mailer(config: &Config) -> Result<Arc<dyn Mailer>, AppError> {
    let mailer = SmtpMailer::from_config(&config.smtp)?;

    tracing::info!(
        "Sending email through {}:{} (implicit TLS: {})",
        config.smtp.host,
        config.smtp.port,
        config.smtp.secure
    );

    Ok(Arc::new(mailer))
}

/// Creates the cover directory below the configured upload directory.
pub async fn setup_cover_storage(config: &Config) -> Result<CoverStorage, AppError> {
    let covers = CoverStorage::new(&config.upload_dir);
    covers.ensure_dir().await?;

    tracing::info!("Serving uploads from {}", config.upload_dir);

    Ok(covers)
}
