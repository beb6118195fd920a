use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use lawdesk_core::errors::{ExError, ExErrorKind};
use lawdesk_core::{Case, FixedClock, Hearing, HearingObserver};
use lawdesk_engine::{BiometricVerifier, NotificationScheduler, ScheduledNotification};
use lawdesk_store::errors::Result;
use lawdesk_store::{KeyValueStore, MemoryStore};

/// 08:00 UTC on the day of the first demo hearing
#[allow(dead_code)]
pub fn demo_day_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::utc(
        "2024-01-20T08:00:00Z".parse().expect("valid instant"),
    ))
}

/// Memory store whose writes to selected keys can be made to fail
#[allow(dead_code)]
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    failing: Mutex<HashSet<String>>,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes_to(&self, key: &str) {
        self.failing.lock().unwrap().insert(key.to_string());
    }

    pub fn heal(&self) {
        self.failing.lock().unwrap().clear();
    }

    fn check(&self, key: &str) -> Result<()> {
        if self.failing.lock().unwrap().contains(key) {
            return Err(ExError::new(ExErrorKind::Persistence)
                .with_op("kv_set")
                .with_entity_id(key)
                .with_message("injected write failure"));
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check(key)?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check(key)?;
        self.inner.remove(key)
    }
}

/// Scheduler that records requests, optionally refusing them all
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingScheduler {
    pub requests: Mutex<Vec<ScheduledNotification>>,
    pub refuse: AtomicBool,
}

#[allow(dead_code)]
impl RecordingScheduler {
    pub fn requests(&self) -> Vec<ScheduledNotification> {
        self.requests.lock().unwrap().clone()
    }
}

impl NotificationScheduler for RecordingScheduler {
    fn schedule(&self, notification: ScheduledNotification) -> Result<()> {
        if self.refuse.load(Ordering::SeqCst) {
            return Err(ExError::new(ExErrorKind::ExternalService)
                .with_op("schedule")
                .with_message("permission denied"));
        }
        self.requests.lock().unwrap().push(notification);
        Ok(())
    }
}

/// Observer that records (case id, hearing number, created?) triples
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Mutex<Vec<(String, u32, bool)>>,
}

impl HearingObserver for RecordingObserver {
    fn on_hearing_created(&self, case: &Case, hearing: &Hearing) {
        self.events
            .lock()
            .unwrap()
            .push((case.id.clone(), hearing.hearing_number, true));
    }

    fn on_hearing_updated(&self, case: &Case, hearing: &Hearing) {
        self.events
            .lock()
            .unwrap()
            .push((case.id.clone(), hearing.hearing_number, false));
    }
}

/// Biometric verifier with scripted answers
#[allow(dead_code)]
pub struct ScriptedBiometrics {
    pub hardware: bool,
    pub enrolled: bool,
    pub accept: bool,
}

impl BiometricVerifier for ScriptedBiometrics {
    fn has_hardware(&self) -> bool {
        self.hardware
    }

    fn is_enrolled(&self) -> bool {
        self.enrolled
    }

    fn authenticate(&self, _prompt: &str) -> bool {
        self.accept
    }
}
