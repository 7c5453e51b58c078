//! Detail view controller.
//!
//! Owns the state of one detail view and the background work feeding it:
//! a text fetch, an image fetch, and one status rotation timer per loading
//! track. Opening, retrying or closing aborts all of that work before
//! anything new is dispatched, and every completion re-checks the view
//! generation before it is applied.
//!
//! All methods that dispatch work must be called from within a Tokio runtime.

mod state;
pub mod status;

use std::sync::Arc;

use parking_lot::Mutex;
use stargazer_core::models::{CatalogEntry, DetailResponse};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

pub use state::*;
use status::ROTATION_INTERVAL;

use crate::detail::DetailClient;

pub struct DetailController {
    client: DetailClient,
    shared: Arc<Shared>,
}

struct Shared {
    inner: Mutex<Inner>,
    tx: watch::Sender<DetailViewState>,
}

#[derive(Default)]
struct Inner {
    state: DetailViewState,
    text_fetch: Option<JoinHandle<()>>,
    image_fetch: Option<JoinHandle<()>>,
    text_timer: Option<JoinHandle<()>>,
    image_timer: Option<JoinHandle<()>>,
}

impl Inner {
    fn timer_slot(&mut self, kind: TrackKind) -> &mut Option<JoinHandle<()>> {
        match kind {
            TrackKind::Text => &mut self.text_timer,
            TrackKind::Image => &mut self.image_timer,
        }
    }

    fn stop_timer(&mut self, kind: TrackKind) {
        if let Some(handle) = self.timer_slot(kind).take() {
            handle.abort();
        }
    }

    /// Abort every fetch and timer belonging to the current generation.
    fn cancel_all(&mut self) {
        for handle in [
            self.text_fetch.take(),
            self.image_fetch.take(),
            self.text_timer.take(),
            self.image_timer.take(),
        ]
        .into_iter()
        .flatten()
        {
            handle.abort();
        }
    }

    /// Replace the state through a pure transition.
    fn transition(&mut self, f: impl FnOnce(DetailViewState) -> DetailViewState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }
}

fn is_live(slot: &Option<JoinHandle<()>>) -> bool {
    slot.as_ref().is_some_and(|handle| !handle.is_finished())
}

impl Shared {
    /// Run `f` under the lock and publish the new state if it reports a change.
    fn update(&self, f: impl FnOnce(&mut Inner) -> bool) -> bool {
        let mut inner = self.inner.lock();
        let changed = f(&mut inner);
        if changed {
            self.tx.send_replace(inner.state.clone());
        }
        changed
    }

    /// Apply a finished text fetch if `generation` is still waiting for it.
    fn complete_text(&self, generation: u64, detail: DetailResponse) -> bool {
        self.update(|inner| {
            if !inner.state.awaiting(TrackKind::Text, generation) {
                return false;
            }
            inner.text_fetch = None;
            inner.stop_timer(TrackKind::Text);
            inner.transition(|s| s.resolve_text(generation, detail));
            true
        })
    }

    /// Apply a finished image fetch if `generation` is still waiting for it.
    fn complete_image(&self, generation: u64, image: Option<String>) -> bool {
        self.update(|inner| {
            if !inner.state.awaiting(TrackKind::Image, generation) {
                return false;
            }
            inner.image_fetch = None;
            inner.stop_timer(TrackKind::Image);
            inner.transition(|s| s.resolve_image(generation, image));
            true
        })
    }
}

impl DetailController {
    pub fn new(client: DetailClient) -> Self {
        let (tx, _rx) = watch::channel(DetailViewState::default());
        Self {
            client,
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner::default()),
                tx,
            }),
        }
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> DetailViewState {
        self.shared.inner.lock().state.clone()
    }

    /// Receive every published state change.
    pub fn subscribe(&self) -> watch::Receiver<DetailViewState> {
        self.shared.tx.subscribe()
    }

    /// Number of status rotation timers still registered.
    pub fn pending_timers(&self) -> usize {
        let inner = self.shared.inner.lock();
        [&inner.text_timer, &inner.image_timer]
            .into_iter()
            .filter(|slot| is_live(slot))
            .count()
    }

    /// Number of fetches still running for the current view.
    pub fn in_flight(&self) -> usize {
        let inner = self.shared.inner.lock();
        [&inner.text_fetch, &inner.image_fetch]
            .into_iter()
            .filter(|slot| is_live(slot))
            .count()
    }

    /// Open the detail view for `entry`, replacing anything on display.
    pub fn open(&self, entry: CatalogEntry) {
        tracing::debug!(object = %entry.id, "Opening detail view");
        self.shared.update(|inner| {
            inner.cancel_all();
            inner.transition(|s| s.open(entry));
            self.dispatch(inner);
            true
        });
    }

    /// Fetch the current object again. Returns `false` if no view is open.
    pub fn retry(&self) -> bool {
        self.shared.update(|inner| {
            if !inner.state.is_open() {
                return false;
            }
            tracing::debug!(generation = inner.state.generation, "Retrying detail view");
            inner.cancel_all();
            inner.transition(DetailViewState::retry);
            self.dispatch(inner);
            true
        })
    }

    /// Close the view. Pending results are dropped and timers stop.
    pub fn close(&self) {
        self.shared.update(|inner| {
            inner.cancel_all();
            inner.transition(DetailViewState::close);
            true
        });
    }

    /// Start both fetches and both rotation timers for the current generation.
    fn dispatch(&self, inner: &mut Inner) {
        let generation = inner.state.generation;
        let Some(name) = inner.state.entry.as_ref().map(|e| e.name.clone()) else {
            return;
        };

        let shared = Arc::clone(&self.shared);
        let client = self.client.clone();
        let text_name = name.clone();
        inner.text_fetch = Some(tokio::spawn(async move {
            let detail = client.fetch_details(&text_name).await;
            if !shared.complete_text(generation, detail) {
                tracing::debug!(object = %text_name, "Discarding stale detail result");
            }
        }));

        let shared = Arc::clone(&self.shared);
        let client = self.client.clone();
        inner.image_fetch = Some(tokio::spawn(async move {
            let image = client.fetch_image(&name).await;
            if !shared.complete_image(generation, image) {
                tracing::debug!(object = %name, "Discarding stale image result");
            }
        }));

        for kind in [TrackKind::Text, TrackKind::Image] {
            let handle = spawn_rotation(Arc::clone(&self.shared), kind, generation);
            *inner.timer_slot(kind) = Some(handle);
        }
    }
}

impl Drop for DetailController {
    fn drop(&mut self) {
        self.shared.inner.lock().cancel_all();
    }
}

/// Advance `kind`'s status message every [`ROTATION_INTERVAL`] until the
/// track leaves loading or the generation moves on.
fn spawn_rotation(shared: Arc<Shared>, kind: TrackKind, generation: u64) -> JoinHandle<()> {
    let start = Instant::now() + ROTATION_INTERVAL;
    tokio::spawn(async move {
        let mut ticker = interval_at(start, ROTATION_INTERVAL);
        loop {
            ticker.tick().await;
            let rotated = shared.update(|inner| {
                if !inner.state.awaiting(kind, generation) {
                    return false;
                }
                inner.transition(|s| s.rotate(kind, generation));
                true
            });
            if !rotated {
                break;
            }
        }
    })
}
