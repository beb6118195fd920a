//! In-app notification log persisted under `app_notifications`
//!
//! Newest first. The stored list is rewritten whole on every change. An
//! unreadable list reads as empty, but is never overwritten by `add` or
//! `mark_read`; only `clear` discards it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use lawdesk_core::errors::{ExError, LawdeskError};
use lawdesk_core::{AppNotification, Clock, NotificationDraft};
use lawdesk_core::{log_op_end, log_op_error, log_op_start};
use lawdesk_store::codec::{load_json, save_json};
use lawdesk_store::errors::Result;
use lawdesk_store::keys::APP_NOTIFICATIONS;
use lawdesk_store::KeyValueStore;
use uuid::Uuid;

pub struct NotificationLog {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl NotificationLog {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Vec<AppNotification> {
        match load_json::<Vec<AppNotification>>(self.store.as_ref(), APP_NOTIFICATIONS) {
            Ok(list) => list.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(
                    err_code = e.code(),
                    error = %e,
                    "notification log unreadable, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Current list for a read-modify-write; a corrupt blob is an error
    fn read_for_update(&self) -> Result<Vec<AppNotification>> {
        Ok(load_json::<Vec<AppNotification>>(self.store.as_ref(), APP_NOTIFICATIONS)?
            .unwrap_or_default())
    }

    fn write_all(&self, list: &[AppNotification]) -> Result<()> {
        save_json(self.store.as_ref(), APP_NOTIFICATIONS, list)
    }

    /// All notifications, newest first
    pub fn list(&self) -> Vec<AppNotification> {
        self.read_all()
    }

    pub fn unread_count(&self) -> usize {
        self.read_all().iter().filter(|n| !n.read).count()
    }

    /// Record a notification at the head of the log
    ///
    /// # Errors
    ///
    /// The stored log is unreadable, or could not be written.
    pub fn add(&self, draft: NotificationDraft) -> Result<AppNotification> {
        let start = Instant::now();
        log_op_start!("notification_add");

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let notification = AppNotification {
            id: Uuid::now_v7().to_string(),
            title: draft.title,
            message: draft.message,
            notification_type: draft.notification_type,
            data: draft.data,
            read: draft.read,
            created_at: self.clock.now(),
        };
        let result = self.read_for_update().and_then(|mut list| {
            list.insert(0, notification.clone());
            self.write_all(&list).map(|()| notification)
        });

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(n) => {
                log_op_end!("notification_add", duration_ms = duration_ms, notification_id = n.id.as_str());
            }
            Err(e) => {
                log_op_error!("notification_add", e.clone(), duration_ms = duration_ms);
            }
        }
        result
    }

    /// # Errors
    /// * `ERR_NOT_FOUND` - no notification with this id
    /// * storage kinds - the log is unreadable or could not be written
    pub fn mark_read(&self, id: &str) -> Result<AppNotification> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut list = self.read_for_update()?;
        let entry = list.iter_mut().find(|n| n.id == id).ok_or_else(|| {
            ExError::from(LawdeskError::NotificationNotFound {
                notification_id: id.to_string(),
            })
        })?;
        entry.read = true;
        let marked = entry.clone();
        self.write_all(&list)?;
        Ok(marked)
    }

    /// Remove every notification; clearing an empty log succeeds
    ///
    /// # Errors
    ///
    /// The stored log could not be removed.
    pub fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.store.remove(APP_NOTIFICATIONS)
    }
}
