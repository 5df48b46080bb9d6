//! Sidebar Component
//!
//! Collapsible sidebar with header, groups and footer.

use leptos::prelude::*;

use crate::store::{store_toggle_sidebar, use_shell_store, ShellStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_shell_store();
    let is_open = move || store.sidebar_open().get();

    view! {
        <aside class=move || if is_open() { "sidebar" } else { "sidebar collapsed" }>
            <div class="sidebar-header" />
            <div class="sidebar-content">
                <div class="sidebar-group" />
                <div class="sidebar-group" />
            </div>
            <div class="sidebar-footer" />
            <button
                class="sidebar-trigger"
                title=move || if is_open() { "Collapse sidebar" } else { "Expand sidebar" }
                on:click=move |_| store_toggle_sidebar(&store)
            >
                {move || if is_open() { "‹" } else { "›" }}
            </button>
        </aside>
    }
}
