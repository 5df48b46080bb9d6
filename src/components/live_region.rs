use leptos::prelude::*;

use crate::store::{use_shell_store, ShellStateStoreFields};

/// Visually hidden `aria-live` sink for drag announcements
#[component]
pub fn LiveRegion() -> impl IntoView {
    let store = use_shell_store();

    view! {
        <div class="sr-only" role="status" aria-live="assertive" aria-atomic="true">
            {move || store.announcement().get()}
        </div>
    }
}
