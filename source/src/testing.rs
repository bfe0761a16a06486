//! Canned data sources for tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use serde_json::{json, Value};

use crate::error::SourceError;
use crate::query::Query;
use crate::source::DataSource;

/// Serves fixed bodies by query key and counts every call it receives.
/// Unknown keys answer HTTP 404.
///
/// A key with several bodies queued serves them in order; the last one
/// repeats once the queue is down to it.
pub struct StubSource {
    responses: RefCell<HashMap<String, VecDeque<Value>>>,
    calls: Cell<usize>,
    failures_left: Cell<usize>,
}

impl StubSource {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            calls: Cell::new(0),
            failures_left: Cell::new(0),
        }
    }

    pub fn respond(self, query: &Query, body: Value) -> Self {
        self.respond_in_turn(query, vec![body])
    }

    /// Queue `bodies` for one key, served one per call.
    pub fn respond_in_turn(self, query: &Query, bodies: Vec<Value>) -> Self {
        self.responses
            .borrow_mut()
            .insert(query.key(), bodies.into_iter().collect());
        self
    }

    /// Fail the next `n` calls with HTTP 503 regardless of key.
    pub fn fail_first(self, n: usize) -> Self {
        self.failures_left.set(n);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DataSource for StubSource {
    fn fetch(&self, query: &Query) -> Result<Value, SourceError> {
        self.calls.set(self.calls.get() + 1);

        if self.failures_left.get() > 0 {
            self.failures_left.set(self.failures_left.get() - 1);
            return Err(SourceError::Status {
                url: query.target(),
                status: 503,
            });
        }

        let mut responses = self.responses.borrow_mut();
        let queued = responses.get_mut(&query.key()).filter(|q| !q.is_empty());
        match queued {
            Some(bodies) if bodies.len() > 1 => Ok(bodies.pop_front().unwrap_or_default()),
            Some(bodies) => Ok(bodies[0].clone()),
            None => Err(SourceError::Status {
                url: query.target(),
                status: 404,
            }),
        }
    }
}

pub fn routes_body(routes: &[(&str, &str)]) -> Value {
    let data: Vec<Value> = routes
        .iter()
        .map(|(id, long_name)| {
            json!({
                "type": "route",
                "id": id,
                "attributes": { "long_name": long_name, "type": 1 }
            })
        })
        .collect();
    json!({ "data": data })
}

pub fn stops_body(stops: &[&str]) -> Value {
    let data: Vec<Value> = stops
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "type": "stop",
                "id": format!("place-{}", i),
                "attributes": { "name": name }
            })
        })
        .collect();
    json!({ "data": data })
}

/// Two routes: Red serves Ashmont, Park, Arlington; Green serves Park, Arlington.
pub fn red_green() -> StubSource {
    StubSource::new()
        .respond(
            &Query::routes(&[0, 1]),
            routes_body(&[("Red", "Red Line"), ("Green-B", "Green Line B")]),
        )
        .respond(
            &Query::stops_for_route("Red"),
            stops_body(&["Ashmont", "Park", "Arlington"]),
        )
        .respond(
            &Query::stops_for_route("Green-B"),
            stops_body(&["Park", "Arlington"]),
        )
}
