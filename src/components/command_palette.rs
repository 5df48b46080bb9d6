//! Command Palette Component
//!
//! Modal command dialog with fuzzy filtered suggestions.

use leptos::html;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::store::{store_set_palette_open, use_shell_store, ShellStateStoreFields};

/// Case-insensitive subsequence match: every query char appears in order in `candidate`
pub fn fuzzy_match(query: &str, candidate: &str) -> bool {
    let mut rest = candidate.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .all(|q| rest.any(|c| c == q))
}

/// Suggestions matching the query, in their configured order
pub fn filter_suggestions<S: AsRef<str>>(suggestions: &[S], query: &str) -> Vec<String> {
    let query = query.trim();
    suggestions
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| fuzzy_match(query, s))
        .map(str::to_string)
        .collect()
}

#[component]
pub fn CommandPalette() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = use_shell_store();
    let suggestions = StoredValue::new(config.palette_suggestions);
    let (query, set_query) = signal(String::new());
    let (selected_idx, set_selected_idx) = signal(0usize);
    let input_ref = NodeRef::<html::Input>::new();

    let is_open = move || store.palette_open().get();
    let matches = move || suggestions.with_value(|all| filter_suggestions(all, &query.get()));

    let close = move || {
        store_set_palette_open(&store, false);
        set_query.set(String::new());
        set_selected_idx.set(0);
    };

    // Focus the input whenever the dialog opens
    Effect::new(move |_| {
        if is_open() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let run_command = move |name: String| {
        log::info!("command selected: {name}");
        close();
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let found = matches();
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < found.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Enter" => {
                ev.prevent_default();
                if let Some(name) = found.get(selected_idx.get()) {
                    run_command(name.clone());
                }
            }
            "Escape" => {
                ev.prevent_default();
                close();
            }
            _ => {}
        }
    };

    view! {
        <Show when=is_open>
            <div class="command-backdrop" on:click=move |_| close()>
                <div
                    class="command-dialog"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <input
                        node_ref=input_ref
                        type="text"
                        class="command-input"
                        placeholder="Type a command or search..."
                        autocomplete="off"
                        prop:value=move || query.get()
                        on:input=move |ev| {
                            set_query.set(event_target_value(&ev));
                            set_selected_idx.set(0);
                        }
                        on:keydown=on_keydown
                    />
                    <div class="command-list">
                        {move || {
                            let found = matches();
                            if found.is_empty() {
                                view! { <div class="command-empty">"No results found."</div> }.into_any()
                            } else {
                                let selected = selected_idx.get();
                                view! {
                                    <div class="command-group">
                                        <div class="command-group-heading">"Suggestions"</div>
                                        {found.into_iter().enumerate().map(|(i, name)| {
                                            let label = name.clone();
                                            view! {
                                                <button
                                                    type="button"
                                                    class=if i == selected { "command-item selected" } else { "command-item" }
                                                    on:click=move |_| run_command(name.clone())
                                                >
                                                    {label}
                                                </button>
                                            }
                                        }).collect_view()}
                                    </div>
                                }.into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
