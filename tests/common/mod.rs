#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use artist_directory::repository::RepositoryError;
use artist_directory::submission::{
    LoggingSubmissionHandler, SubmissionDraft, SubmissionError, SubmissionHandler,
    SubmissionReceipt, SubmissionService, WizardId, WizardRecord, WizardRepository,
};
use serde_json::{json, Map, Value};

#[derive(Default)]
pub struct MemoryWizards {
    records: Mutex<HashMap<WizardId, WizardRecord>>,
    fetch_delay: Duration,
}

impl MemoryWizards {
    /// Store whose reads stall, so concurrent calls on one session overlap.
    pub fn with_fetch_delay(fetch_delay: Duration) -> Self {
        Self {
            fetch_delay,
            ..Self::default()
        }
    }
}

impl WizardRepository for MemoryWizards {
    fn insert(&self, record: WizardRecord) -> Result<WizardRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: WizardRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.get_mut(&record.id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &WizardId) -> Result<Option<WizardRecord>, RepositoryError> {
        thread::sleep(self.fetch_delay);
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Handler that is always down.
pub struct OfflineHandler;

impl SubmissionHandler for OfflineHandler {
    fn submit(&self, _: &SubmissionDraft) -> Result<SubmissionReceipt, SubmissionError> {
        Err(SubmissionError::Unavailable("intake offline".to_string()))
    }
}

/// Handler that takes its time and counts how often it is called.
pub struct SlowHandler {
    inner: LoggingSubmissionHandler,
    delay: Duration,
    calls: AtomicUsize,
}

impl SlowHandler {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: LoggingSubmissionHandler::default(),
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SubmissionHandler for SlowHandler {
    fn submit(&self, draft: &SubmissionDraft) -> Result<SubmissionReceipt, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        thread::sleep(self.delay);
        self.inner.submit(draft)
    }
}

pub fn service() -> (
    Arc<SubmissionService<MemoryWizards, LoggingSubmissionHandler>>,
    Arc<LoggingSubmissionHandler>,
) {
    let handler = Arc::new(LoggingSubmissionHandler::default());
    let service = Arc::new(SubmissionService::new(
        Arc::new(MemoryWizards::default()),
        handler.clone(),
    ));
    (service, handler)
}

pub fn patch(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(fields) => fields,
        other => panic!("patch must be an object, got {other}"),
    }
}

pub fn basic_info() -> Value {
    json!({
        "name": "Nova Reyes",
        "profilePicture": "https://images.example.com/nova.jpg",
        "location": "Austin, TX",
        "bio": "Vocalist and producer blending soul with electronic textures.",
    })
}

pub fn artist_types() -> Value {
    json!({ "types": ["Musician", "DJ"] })
}

pub fn identity() -> Value {
    json!({
        "skinTone": { "value": "Olive", "visibility": "Public" },
        "height": { "value": 172, "visibility": "Recruiters only" },
        "sexualOrientation": { "value": ["Queer"], "visibility": "Private" },
    })
}

pub fn socials() -> Value {
    json!({
        "socials": {
            "instagram": "https://instagram.com/novareyes",
            "spotify": "https://open.spotify.com/artist/nova",
            "tiktok": "",
        }
    })
}
