//! Fetch-on-mount category menu.
//!
//! [`CategoryMenuLoader`] owns the category list shown in the header
//! dropdown. Mounting it spawns a single background request for the first
//! page of categories; the result comes back through the application event
//! channel as [`AppEvent::CategoriesLoaded`] and is applied on the UI task,
//! so the list never needs a lock.
//!
//! ```text
//!   Idle ──mount──▶ Loading{gen} ──apply Ok──▶ Loaded
//!    ▲                   │
//!    └────unmount────────┤
//!                        └──────apply Err──▶ Failed   (list stays empty)
//! ```
//!
//! `Loaded` and `Failed` are terminal: there is no re-fetch. Unmounting
//! while `Loading` returns the loader to `Idle`, so a later mount starts a
//! fresh request under a new generation. Results are only accepted while
//! the loader is mounted and only for the generation it is waiting on, so a
//! response that arrives after `unmount` is dropped.

use crate::app::AppEvent;
use crate::catalog::{Category, CategoryClient, CategoryWindow, FetchError};
use crate::nav::Route;
use crate::util::catch_task_panic;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Progress of the one-shot category load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Not mounted yet; no request issued.
    Idle,
    /// Request in flight, tagged with the generation that will be accepted.
    Loading { generation: u64 },
    /// Request succeeded; the list holds `count` categories (possibly zero).
    Loaded { count: usize },
    /// Request failed; the list kept its previous (empty) contents.
    Failed { error: String },
}

impl LoadState {
    /// True once the request has resolved, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded { .. } | Self::Failed { .. })
    }
}

/// One navigable entry of the category dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry<'a> {
    category: &'a Category,
}

impl<'a> MenuEntry<'a> {
    /// Display label: the category name as received.
    pub fn label(&self) -> &'a str {
        &self.category.name
    }

    /// Route activated by this entry.
    pub fn route(&self) -> Route {
        Route::category(&self.category.id, &self.category.name)
    }
}

/// Loads the header's category list once per mount and exposes it as menu entries.
#[derive(Debug)]
pub struct CategoryMenuLoader {
    categories: Vec<Category>,
    state: LoadState,
    generation: u64,
    mounted: bool,
    handle: Option<JoinHandle<()>>,
}

impl Default for CategoryMenuLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryMenuLoader {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            state: LoadState::Idle,
            generation: 0,
            mounted: false,
            handle: None,
        }
    }

    /// Starts the category request if this loader has never been mounted.
    ///
    /// Spawns one task that fetches [`CategoryWindow::HEADER`] and sends
    /// [`AppEvent::CategoriesLoaded`] on `event_tx`. Must be called from
    /// within a tokio runtime.
    ///
    /// Returns `true` if a request was issued. Calls while a request is in
    /// flight or after it resolved are no-ops returning `false`.
    pub fn mount(&mut self, client: &CategoryClient, event_tx: &mpsc::Sender<AppEvent>) -> bool {
        let Some(generation) = self.begin_load() else {
            tracing::debug!(state = ?self.state, "Category menu already mounted, not refetching");
            return false;
        };

        let client = client.clone();
        let tx = event_tx.clone();

        tracing::debug!(generation, "Spawning category load");

        self.handle = Some(tokio::spawn(async move {
            let result =
                match catch_task_panic(client.fetch_categories(CategoryWindow::HEADER)).await {
                    Ok(result) => result,
                    Err(panic_msg) => {
                        tracing::error!(error = %panic_msg, "Category load task panicked");
                        Err(FetchError::Panicked(panic_msg))
                    }
                };

            if let Err(e) = tx
                .send(AppEvent::CategoriesLoaded { generation, result })
                .await
            {
                tracing::debug!(error = %e, "Category result dropped (receiver closed)");
            }
        }));

        true
    }

    /// Moves `Idle` to `Loading` and returns the generation to wait for.
    ///
    /// `None` if a load was already started on this loader.
    pub(crate) fn begin_load(&mut self) -> Option<u64> {
        if self.state != LoadState::Idle {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.mounted = true;
        self.state = LoadState::Loading {
            generation: self.generation,
        };
        Some(self.generation)
    }

    /// Applies a completed request.
    ///
    /// On success the list is replaced wholesale, preserving the order the
    /// backend returned. On failure the list is left untouched and the state
    /// records the reason; nothing is surfaced to the user.
    ///
    /// Returns `false` (and changes nothing) when the loader is unmounted or
    /// not waiting on `generation`.
    pub fn apply(&mut self, generation: u64, result: Result<Vec<Category>, FetchError>) -> bool {
        if !self.mounted {
            tracing::debug!(generation, "Ignoring category result for unmounted menu");
            return false;
        }
        if self.state != (LoadState::Loading { generation }) {
            tracing::debug!(
                expected = self.generation,
                got = generation,
                state = ?self.state,
                "Ignoring stale category result"
            );
            return false;
        }

        self.handle = None;
        match result {
            Ok(categories) => {
                tracing::info!(count = categories.len(), "Category menu loaded");
                self.state = LoadState::Loaded {
                    count: categories.len(),
                };
                self.categories = categories;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Category menu load failed, showing empty menu");
                self.state = LoadState::Failed {
                    error: e.to_string(),
                };
            }
        }
        true
    }

    /// Detaches the loader from the display.
    ///
    /// Aborts an outstanding request; any result still in the channel will be
    /// rejected by [`apply`](Self::apply). An unsettled load goes back to
    /// `Idle` so the next mount can start over.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!(generation = self.generation, "Aborted pending category load");
        }
        if matches!(self.state, LoadState::Loading { .. }) {
            self.state = LoadState::Idle;
        }
        self.mounted = false;
    }

    /// Menu entries for the current list, lazily and in list order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = MenuEntry<'_>> + '_ {
        self.categories
            .iter()
            .map(|category| MenuEntry { category })
    }

    /// Entry at `index`, if any.
    pub fn entry(&self, index: usize) -> Option<MenuEntry<'_>> {
        self.categories.get(index).map(|category| MenuEntry { category })
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl Drop for CategoryMenuLoader {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
