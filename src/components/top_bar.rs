//! Top Bar Component
//!
//! Back button, breadcrumb trail and the search box.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::store::{use_shell_store, ShellStateStoreFields};

#[component]
pub fn TopBar() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = use_shell_store();
    let hint = config.palette_shortcut.hint();
    let crumb_count = config.breadcrumbs.len();

    let go_back = move |_| {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.back() {
                log::debug!("history back failed: {e:?}");
            }
        }
    };

    view! {
        <div class="top-bar">
            <button class="back-btn" on:click=go_back>
                <span class="back-icon">"‹"</span>
                <p>"Back"</p>
            </button>

            <span class="tally">"|"</span>

            <nav class="breadcrumb" aria-label="breadcrumb">
                <ol class="breadcrumb-list">
                    {config.breadcrumbs.into_iter().enumerate().map(|(i, crumb)| {
                        view! {
                            <li class="breadcrumb-item">
                                <a class="breadcrumb-link" href=crumb.href>{crumb.label}</a>
                            </li>
                            {(i + 1 < crumb_count).then(|| view! {
                                <li class="breadcrumb-separator" role="presentation">"/"</li>
                            })}
                        }
                    }).collect_view()}
                </ol>
            </nav>

            <div class="search">
                <span class="search-icon">"⌕"</span>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search..."
                    prop:value=move || store.search_query().get()
                    on:input=move |ev| {
                        *store.search_query().write() = event_target_value(&ev);
                    }
                />
                <p class="search-hint">
                    "Press "
                    <kbd>{hint}</kbd>
                </p>
            </div>
        </div>
    }
}
