// crates/countries-core/src/handle.rs

//! # View Handle
//!
//! Owns the current [`ViewState`] of one mounted view and swaps it on every
//! [`Action`]. The browser runs single-threaded and every callback finishes
//! before the next one starts, so the state lives in an `Rc<RefCell<_>>`.
//!
//! The one-time load is split in two: [`ViewHandle::begin_load`] hands out a
//! [`LoadTicket`] exactly once, and the ticket commits the fetch outcome later.
//! The ticket only keeps a weak reference. When the handle has been dropped
//! (the view was torn down mid-fetch) the late outcome is discarded.

use crate::config::ViewConfig;
use crate::error::Result;
use crate::model::Country;
use crate::view::{reduce, Action, ViewState};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, error, info};

/// Progress of the one-time load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    NotStarted,
    Pending,
    Loaded,
    Failed,
}

/// What happened to a load outcome handed to [`LoadTicket::complete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commit {
    /// The list was stored.
    Applied,
    /// The source failed; the failure was logged and the lists stay empty.
    Failed,
    /// The view no longer exists; nothing was touched.
    Discarded,
}

struct Inner {
    state: RefCell<ViewState>,
    phase: Cell<LoadPhase>,
}

pub struct ViewHandle {
    inner: Rc<Inner>,
}

impl Default for ViewHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewHandle {
    pub fn new() -> Self {
        Self::with_state(ViewState::default())
    }

    pub fn with_config(config: &ViewConfig) -> Self {
        Self::with_state(ViewState::with_config(config))
    }

    fn with_state(state: ViewState) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                phase: Cell::new(LoadPhase::NotStarted),
            }),
        }
    }

    /// Applies one transition.
    pub fn dispatch(&self, action: Action) {
        apply(&self.inner, action);
    }

    /// Runs `f` against the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// A copy of the current state. The full list is shared, not copied.
    pub fn snapshot(&self) -> ViewState {
        self.inner.state.borrow().clone()
    }

    pub fn load_phase(&self) -> LoadPhase {
        self.inner.phase.get()
    }

    /// Starts the one-time load. Returns `None` if it was already started.
    pub fn begin_load(&self) -> Option<LoadTicket> {
        if self.inner.phase.get() != LoadPhase::NotStarted {
            debug!("country list load already started, ignoring");
            return None;
        }
        self.inner.phase.set(LoadPhase::Pending);
        Some(LoadTicket {
            view: Rc::downgrade(&self.inner),
        })
    }
}

fn apply(inner: &Inner, action: Action) {
    let mut slot = inner.state.borrow_mut();
    let prev = std::mem::take(&mut *slot);
    *slot = reduce(prev, action);
}

/// Permission to commit the outcome of the one-time load.
pub struct LoadTicket {
    view: Weak<Inner>,
}

impl LoadTicket {
    /// False once the view this ticket belongs to has been dropped.
    pub fn is_live(&self) -> bool {
        self.view.strong_count() > 0
    }

    /// Commits the fetch outcome if the view still exists.
    ///
    /// A failure is logged here and nowhere else; the view keeps its empty
    /// lists and renders the "no results" message.
    pub fn complete(self, outcome: Result<Vec<Country>>) -> Commit {
        let Some(inner) = self.view.upgrade() else {
            debug!("view was torn down before the country list arrived, discarding");
            return Commit::Discarded;
        };

        match outcome {
            Ok(list) => {
                info!(count = list.len(), "country list loaded");
                apply(&inner, Action::Loaded(list));
                inner.phase.set(LoadPhase::Loaded);
                Commit::Applied
            }
            Err(e) => {
                error!(error = %e, "could not load country list");
                inner.phase.set(LoadPhase::Failed);
                Commit::Failed
            }
        }
    }
}
