//! Generic admin collection management

mod state;
mod view;

pub use state::LoadState;
pub use view::{CategoryFilter, SortDirection};

use crate::error::Error;
use crate::gateway::RecordGateway;
use crate::notify::NotificationSink;
use crate::resources::{Editable, Resource};
use log::warn;
use std::sync::Arc;
use view::ViewQuery;

/// Cached admin view of one backend collection.
///
/// One manager is instantiated per resource. It owns the fetched cache,
/// derives the presentation projection (search, category filter, sort), and
/// performs server-confirmed mutations that patch the cache and report their
/// outcome through the notification sink.
///
/// Mutating operations take `&mut self`, so a second submission cannot start
/// while one is in flight.
pub struct CollectionManager<R: Resource> {
    gateway: Box<dyn RecordGateway<R>>,
    sink: Arc<dyn NotificationSink>,
    records: Vec<R>,
    state: LoadState,
    query: ViewQuery<R>,
}

impl<R: Resource> CollectionManager<R> {
    /// Create a manager over the given gateway, reporting through `sink`
    pub fn new(gateway: Box<dyn RecordGateway<R>>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            gateway,
            sink,
            records: Vec::new(),
            state: LoadState::Uninitialized,
            query: ViewQuery::new(),
        }
    }

    /// Lifecycle state of the cache
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The raw cache, in backend order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Cached record with the given identifier
    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// The active search term
    pub fn search_term(&self) -> &str {
        &self.query.search
    }

    /// The active sort field
    pub fn sort_field(&self) -> R::SortField {
        self.query.sort_field
    }

    /// The active sort direction
    pub fn sort_direction(&self) -> SortDirection {
        self.query.direction
    }

    /// The active category constraint
    pub fn category_filter(&self) -> &CategoryFilter {
        &self.query.category
    }

    /// Set the search term; matching is a case-insensitive substring test
    /// over the resource's searchable fields, and an empty term matches
    /// every record
    pub fn search(&mut self, term: &str) {
        self.query.search = term.to_string();
    }

    /// Select the sort field.
    ///
    /// Selecting the already-active field flips the direction; any other
    /// field starts ascending.
    pub fn sort(&mut self, field: R::SortField) {
        if self.query.sort_field == field {
            self.query.direction = self.query.direction.toggled();
        } else {
            self.query.sort_field = field;
            self.query.direction = SortDirection::Ascending;
        }
    }

    /// Constrain the projection to one category, or lift the constraint
    pub fn filter_by_category(&mut self, filter: CategoryFilter) {
        self.query.category = filter;
    }

    /// The presentation projection, derived from the cache on every call
    pub fn view(&self) -> Vec<&R> {
        self.query.project(&self.records)
    }

    /// Fetch the full collection, wholesale-replacing the cache on success.
    ///
    /// On failure the previous cache is kept, the sink gets one failure
    /// notification, and the manager parks in [`LoadState::LoadError`] until
    /// the next `load` call. There is no automatic retry.
    pub async fn load(&mut self) -> Result<(), Error> {
        self.state = LoadState::Loading;
        match self.gateway.list().await {
            Ok(records) => {
                self.records = records;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(err) => {
                let message = format!("Failed to load {}", R::LABEL_PLURAL);
                warn!("{}: {}", message, err);
                self.sink.notify_failure(&message);
                self.state = LoadState::LoadError(message);
                Err(err)
            }
        }
    }

    /// Fetch one record for form prefill; the cache is not touched
    pub async fn fetch(&self, id: &str) -> Result<R, Error> {
        match self.gateway.retrieve(id).await {
            Ok(record) => Ok(record),
            Err(err) => {
                self.sink
                    .notify_failure(&format!("Failed to load {}", R::LABEL.to_lowercase()));
                Err(err)
            }
        }
    }

    /// Delete a record and drop it from the cache, without a reload
    pub async fn remove(&mut self, id: &str) -> Result<(), Error> {
        match self.gateway.delete(id).await {
            Ok(()) => {
                self.records.retain(|record| record.id() != id);
                self.sink
                    .notify_success(&format!("{} deleted successfully", R::LABEL));
                Ok(())
            }
            Err(err) => {
                let fallback = format!("Failed to delete {}", R::LABEL.to_lowercase());
                self.sink.notify_failure(&failure_text(&err, fallback));
                Err(err)
            }
        }
    }
}

impl<R: Editable> CollectionManager<R> {
    /// Validate and store a new record, appending the echoed record to the
    /// cache.
    ///
    /// A draft that fails validation is rejected before any network call.
    pub async fn create(&mut self, draft: &R::Draft) -> Result<R, Error> {
        if let Err(problems) = R::validate(draft) {
            self.sink.notify_failure(&problems.to_string());
            return Err(Error::Validation(problems));
        }

        match self.gateway.create(draft).await {
            Ok(record) => {
                self.records.push(record.clone());
                self.sink
                    .notify_success(&format!("{} added successfully", R::LABEL));
                Ok(record)
            }
            Err(err) => {
                let fallback = format!("Failed to add {}", R::LABEL.to_lowercase());
                self.sink.notify_failure(&failure_text(&err, fallback));
                Err(err)
            }
        }
    }

    /// Validate and rewrite a record, replacing the cached copy in place.
    ///
    /// An identifier missing from the cache leaves it unchanged; the echoed
    /// record is still returned.
    pub async fn update(&mut self, id: &str, draft: &R::Draft) -> Result<R, Error> {
        if let Err(problems) = R::validate(draft) {
            self.sink.notify_failure(&problems.to_string());
            return Err(Error::Validation(problems));
        }

        match self.gateway.update(id, draft).await {
            Ok(record) => {
                if let Some(slot) = self.records.iter_mut().find(|r| r.id() == id) {
                    *slot = record.clone();
                }
                self.sink
                    .notify_success(&format!("{} updated successfully", R::LABEL));
                Ok(record)
            }
            Err(err) => {
                let fallback = format!("Failed to update {}", R::LABEL.to_lowercase());
                self.sink.notify_failure(&failure_text(&err, fallback));
                Err(err)
            }
        }
    }
}

/// Server-provided display message when present, else the generic fallback
fn failure_text(err: &Error, fallback: String) -> String {
    err.server_message()
        .map(str::to_string)
        .unwrap_or(fallback)
}
