use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::SourceError;
use crate::query::Query;
use crate::source::DataSource;

/// Memoizes data source responses by query key for the life of the cache.
///
/// Each distinct key reaches the source at most once after it succeeds.
/// Failed fetches are not stored, nor are bodies the caller's decode step
/// rejects, so the next call retries. No eviction.
pub struct FetchCache<S> {
    source: S,
    entries: RefCell<HashMap<String, serde_json::Value>>,
}

impl<S: DataSource> FetchCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: RefCell::new(HashMap::new()),
        }
    }

    pub fn fetch(&self, query: &Query) -> Result<serde_json::Value, SourceError> {
        self.fetch_decoded(query, |body| Ok(body.clone()))
    }

    /// Fetch and decode a body. A fresh body is stored only once `decode`
    /// accepts it.
    pub fn fetch_decoded<T>(
        &self,
        query: &Query,
        decode: impl FnOnce(&serde_json::Value) -> Result<T, SourceError>,
    ) -> Result<T, SourceError> {
        let key = query.key();
        if let Some(body) = self.entries.borrow().get(&key) {
            log::trace!("fetch cache hit: {}", key);
            return decode(body);
        }

        log::debug!("fetch cache miss: {}", key);
        let body = self.source.fetch(query)?;
        let decoded = decode(&body)?;
        self.entries.borrow_mut().insert(key, body);
        Ok(decoded)
    }

    pub fn contains(&self, query: &Query) -> bool {
        self.entries.borrow().contains_key(&query.key())
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
