use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    error::mail::MailError,
    service::{
        auth::token::JwtKeys,
        cover::CoverStorage,
        notification::{
            mailer::{Mailer, OutgoingEmail},
            NotificationDispatcher,
        },
    },
};

mod notification;
mod title;
mod user;

pub const JWT_SECRET: &str = "test-secret-test-secret-test-secret";

pub fn jwt_keys() -> JwtKeys {
    JwtKeys::new(JWT_SECRET, chrono::Duration::hours(24))
}

pub fn frontend_url() -> Url {
    Url::parse("http://localhost:5173").unwrap()
}

/// Mailer capturing emails in memory, optionally failing for one recipient.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    fail_for: Option<String>,
}

impl RecordingMailer {
    pub fn failing_for(email: &str) -> Self {
        Self {
            sent: Arc::default(),
            fail_for: Some(email.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Waits for background notification jobs to deliver `count` emails.
    pub async fn wait_for(&self, count: usize) -> Vec<OutgoingEmail> {
        for _ in 0..200 {
            if self.sent().len() >= count {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.sent()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        if self.fail_for.as_deref() == Some(email.to_email.as_str()) {
            let err = "not-an-address".parse::<lettre::Address>().unwrap_err();
            return Err(MailError::Address(err));
        }

        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

pub fn dispatcher(db: &DatabaseConnection, mailer: &RecordingMailer) -> NotificationDispatcher {
    NotificationDispatcher::new(db.clone(), Arc::new(mailer.clone()), frontend_url())
}

/// Cover storage in a temporary directory removed when the guard drops.
pub fn temp_covers() -> (tempfile::TempDir, CoverStorage) {
    let dir = tempfile::tempdir().unwrap();
    let storage = CoverStorage::new(dir.path());
    (dir, storage)
}

pub const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
