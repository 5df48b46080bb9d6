//! Board View Component
//!
//! Renders the containers with drag-and-drop support.
//! Uses leptos-dragdrop for pointer tracking; every lifecycle event is
//! routed through the store's reducer.

use leptos::prelude::*;

use crate::board::BoardEvent;
use crate::config::AppConfig;
use crate::store::{store_dispatch, use_shell_store, ShellStateStoreFields};

use leptos_dragdrop::*;

fn over_id(ev: &DndEvent) -> Option<String> {
    ev.over_id().map(str::to_string)
}

/// All containers plus the floating drag overlay
#[component]
pub fn BoardView() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = use_shell_store();

    let dnd = create_dnd_signals(config.drag_threshold_px);

    let callbacks = DndCallbacks {
        on_drag_start: Callback::new(move |ev: DndEvent| {
            store_dispatch(&store, BoardEvent::DragStart { active: ev.active.id });
        }),
        on_drag_over: Callback::new(move |ev: DndEvent| {
            let over = over_id(&ev);
            store_dispatch(&store, BoardEvent::DragOver { active: ev.active.id, over });
        }),
        on_drag_end: Callback::new(move |ev: DndEvent| {
            let over = over_id(&ev);
            store_dispatch(&store, BoardEvent::DragEnd { active: ev.active.id, over });
        }),
        on_drag_cancel: Callback::new(move |ev: DndEvent| {
            store_dispatch(&store, BoardEvent::DragCancel { active: ev.active.id });
        }),
    };

    let listeners = bind_global_listeners(dnd, callbacks);
    on_cleanup(move || listeners.remove());

    // Containers are fixed for the lifetime of the board
    let container_ids: Vec<String> = store
        .board()
        .with_untracked(|s| s.board.containers.iter().map(|c| c.id.clone()).collect());

    view! {
        <div class="board">
            {container_ids.into_iter().map(|id| view! {
                <SortableContainer id=id dnd=dnd callbacks=callbacks />
            }).collect_view()}
            <DragOverlay dnd=dnd />
        </div>
    }
}

/// A drop target listing its items
#[component]
pub fn SortableContainer(
    id: String,
    dnd: DndSignals,
    callbacks: DndCallbacks,
) -> impl IntoView {
    let store = use_shell_store();

    let on_mouseover = make_on_container_mouseover(dnd, callbacks, id.clone());
    let on_mouseleave = make_on_container_mouseleave(dnd, callbacks);

    let items = {
        let id = id.clone();
        move || {
            store
                .board()
                .with(|s| s.board.items(&id).map(<[String]>::to_vec).unwrap_or_default())
        }
    };

    let container_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("sortable-container");
            if dnd.is_over(&id) { c.push_str(" drop-target"); }
            c
        }
    };

    let container_attr = id;

    view! {
        <div
            class=container_class
            data-container-id=container_attr
            on:mouseover=on_mouseover
            on:mouseleave=on_mouseleave
        >
            <For
                each=items
                key=|item_id| item_id.clone()
                children=move |item_id| {
                    view! { <SortableItem id=item_id dnd=dnd /> }
                }
            />
        </div>
    }
}

/// A draggable row
///
/// Hover is tracked by the enclosing container through `data-dnd-item`.
#[component]
pub fn SortableItem(
    id: String,
    dnd: DndSignals,
) -> impl IntoView {
    let on_mousedown = make_on_mousedown(dnd, id.clone());

    let item_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("sortable-item");
            if dnd.is_active(&id) { c.push_str(" dragging"); }
            else if dnd.is_over(&id) { c.push_str(" drop-target"); }
            c
        }
    };

    let item_attr = id.clone();

    view! {
        <div
            class=item_class
            data-dnd-item=item_attr
            on:mousedown=on_mousedown
        >
            {id}
        </div>
    }
}

/// Floating copy of the dragged item that follows the pointer
#[component]
pub fn DragOverlay(dnd: DndSignals) -> impl IntoView {
    let style = move || {
        let (x, y) = dnd.pointer_read.get();
        format!("position: fixed; left: {}px; top: {}px; pointer-events: none;", x, y)
    };

    view! {
        {move || dnd.active_id_read.get().map(|id| view! {
            <div class="sortable-item drag-overlay" style=style>
                {id}
            </div>
        })}
    }
}
