//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::announcements::announce;
use crate::board::{reduce, BoardEvent, BoardState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShellState {
    /// Containers and the active drag
    pub board: BoardState,
    /// Sidebar expanded
    pub sidebar_open: bool,
    /// Command palette visible
    pub palette_open: bool,
    /// Text in the top bar search box
    pub search_query: String,
    /// Latest drag announcement for the live region
    pub announcement: String,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            sidebar_open: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ShellStore = Store<ShellState>;

/// Get the shell store from context
pub fn use_shell_store() -> ShellStore {
    expect_context::<ShellStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a drag event to the board and announce it
pub fn store_dispatch(store: &ShellStore, event: BoardEvent) {
    let next = store.board().with_untracked(|prev| reduce(prev, &event));
    if store.board().with_untracked(|prev| *prev != next) {
        *store.board().write() = next;
    }
    store_announce(store, announce(&event));
}

/// Replace the live-region announcement
pub fn store_announce(store: &ShellStore, message: String) {
    log::info!("{message}");
    *store.announcement().write() = message;
}

pub fn store_toggle_palette(store: &ShellStore) {
    let field = store.palette_open();
    let mut open = field.write();
    *open = !*open;
}

pub fn store_set_palette_open(store: &ShellStore, open: bool) {
    *store.palette_open().write() = open;
}

pub fn store_toggle_sidebar(store: &ShellStore) {
    let field = store.sidebar_open();
    let mut open = field.write();
    *open = !*open;
}
