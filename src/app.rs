//! Board Shell App
//!
//! Sidebar, top bar, the drag-and-drop board and the command palette.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BoardView, CommandPalette, LiveRegion, Sidebar, TopBar};
use crate::config::AppConfig;
use crate::store::{store_toggle_palette, ShellState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(ShellState::new());
    provide_context(store);

    // Palette shortcut, removed again when the app unmounts
    let shortcut = config.palette_shortcut.clone();
    let keydown = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if shortcut.matches_event(&ev) {
            ev.prevent_default();
            store_toggle_palette(&store);
        }
    });
    on_cleanup(move || keydown.remove());

    provide_context(config);

    view! {
        <div class="app-layout">
            <Sidebar />

            <main class="main-content">
                <TopBar />

                <h1 class="title">"Hello world!"</h1>

                <BoardView />
                <LiveRegion />
            </main>

            <CommandPalette />
        </div>
    }
}
