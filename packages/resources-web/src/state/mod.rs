//! Page state and mount lifecycle

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::api::ClientError;
use crate::types::Resource;

/// The only list error a user ever sees. Details go to the log.
pub const LIST_LOAD_ERROR: &str = "Failed to load resources";

pub const DETAIL_NOT_FOUND: &str = "Resource not found or failed to load.";
pub const DETAIL_LOAD_ERROR: &str = "Failed to load resource";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Error,
    Ready,
}

/// State behind the resource list page.
///
/// Starts in `Loading`; one [`apply`](Self::apply) moves it to `Ready` or
/// `Error`, and nothing moves it back.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceListState {
    pub resources: Vec<Resource>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl Default for ResourceListState {
    fn default() -> Self {
        Self {
            resources: Vec::new(),
            is_loading: true,
            error_message: None,
        }
    }
}

impl ResourceListState {
    pub fn phase(&self) -> LoadPhase {
        if self.is_loading {
            LoadPhase::Loading
        } else if self.error_message.is_some() {
            LoadPhase::Error
        } else {
            LoadPhase::Ready
        }
    }

    /// Apply the outcome of the collection fetch. A failure keeps whatever
    /// resources were already held.
    pub fn apply(&mut self, result: Result<Vec<Resource>, ClientError>) {
        match result {
            Ok(resources) => {
                tracing::info!(count = resources.len(), "Loaded resources");
                self.resources = resources;
                self.error_message = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching resources");
                self.error_message = Some(LIST_LOAD_ERROR.to_string());
            }
        }
        self.is_loading = false;
    }
}

/// State behind the resource detail page.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ResourceDetailState {
    #[default]
    Loading,
    Failed(String),
    Loaded(Resource),
}

impl ResourceDetailState {
    pub fn apply(&mut self, result: Result<Resource, ClientError>) {
        *self = match result {
            Ok(resource) => ResourceDetailState::Loaded(resource),
            Err(ClientError::NotFound | ClientError::NoData) => {
                tracing::warn!("Resource not found");
                ResourceDetailState::Failed(DETAIL_NOT_FOUND.to_string())
            }
            Err(ClientError::Rejected(message)) => {
                tracing::warn!(error = %message, "Resource request rejected");
                if message.trim().is_empty() {
                    ResourceDetailState::Failed(DETAIL_NOT_FOUND.to_string())
                } else {
                    ResourceDetailState::Failed(message)
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching resource");
                ResourceDetailState::Failed(DETAIL_LOAD_ERROR.to_string())
            }
        };
    }
}

/// Liveness flag owned by a component's mount.
///
/// Async work spawned by the component checks it before writing results
/// back, so a response that lands after unmount is dropped.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn mark_unmounted(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Liveness flag cleared when the calling component is dropped
pub fn use_liveness() -> Liveness {
    let liveness = use_hook(Liveness::new);

    let on_drop = liveness.clone();
    use_drop(move || on_drop.mark_unmounted());

    liveness
}
