// Test support utilities for both unit and integration tests

use crate::scout_api::{ScoutApiError, SupplierApi};
use crate::supplier::SupplierRecord;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Scripted result of one mock call
#[derive(Debug, Clone)]
pub enum MockReply<T> {
    Ok(T),
    Status(u16),
    Unavailable,
}

impl<T> MockReply<T> {
    fn into_result(self) -> Result<T, ScoutApiError> {
        match self {
            MockReply::Ok(value) => Ok(value),
            MockReply::Status(code) => Err(ScoutApiError::Status(code)),
            MockReply::Unavailable => {
                Err(ScoutApiError::Unavailable("mock service offline".to_string()))
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Scripted<T> {
    delay: Duration,
    reply: MockReply<T>,
}

/// Mock search/persistence service
///
/// Replies are scripted per query and may be delayed, which together with a
/// paused tokio clock lets tests control the order responses resolve in.
/// Queries without a script resolve immediately with no results.
pub struct MockSupplierApi {
    searches: Mutex<HashMap<String, Scripted<Vec<SupplierRecord>>>>,
    save: Mutex<Scripted<()>>,
    search_calls: Mutex<Vec<String>>,
    save_calls: Mutex<Vec<SupplierRecord>>,
    saved: Mutex<Vec<SupplierRecord>>,
}

impl Default for MockSupplierApi {
    fn default() -> Self {
        MockSupplierApi {
            searches: Mutex::new(HashMap::new()),
            save: Mutex::new(Scripted {
                delay: Duration::ZERO,
                reply: MockReply::Ok(()),
            }),
            search_calls: Mutex::new(Vec::new()),
            save_calls: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
        }
    }
}

impl MockSupplierApi {
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_search(&self, query: &str, results: Vec<SupplierRecord>) {
        self.script_search(query, Duration::ZERO, MockReply::Ok(results));
    }

    pub fn on_search_delayed(&self, query: &str, delay: Duration, results: Vec<SupplierRecord>) {
        self.script_search(query, delay, MockReply::Ok(results));
    }

    pub fn script_search(&self, query: &str, delay: Duration, reply: MockReply<Vec<SupplierRecord>>) {
        self.searches
            .lock()
            .unwrap()
            .insert(query.to_string(), Scripted { delay, reply });
    }

    pub fn script_save(&self, delay: Duration, reply: MockReply<()>) {
        *self.save.lock().unwrap() = Scripted { delay, reply };
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn save_calls(&self) -> Vec<SupplierRecord> {
        self.save_calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SupplierApi for MockSupplierApi {
    async fn search(&self, query: &str) -> Result<Vec<SupplierRecord>, ScoutApiError> {
        self.search_calls.lock().unwrap().push(query.to_string());

        let scripted = self.searches.lock().unwrap().get(query).cloned();
        let Some(scripted) = scripted else {
            return Ok(Vec::new());
        };

        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.reply.into_result()
    }

    async fn save(&self, supplier: &SupplierRecord) -> Result<(), ScoutApiError> {
        self.save_calls.lock().unwrap().push(supplier.clone());

        let scripted = self.save.lock().unwrap().clone();
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.reply.into_result()?;

        let mut saved = self.saved.lock().unwrap();
        let mut stored = supplier.clone();
        stored.id = Some(saved.len() as i64 + 1);
        saved.push(stored);
        Ok(())
    }

    async fn list_saved(&self) -> Result<Vec<SupplierRecord>, ScoutApiError> {
        Ok(self.saved.lock().unwrap().clone())
    }
}
