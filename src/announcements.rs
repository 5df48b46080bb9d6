//! Drag Announcements
//!
//! Screen-reader messages for each step of a drag gesture.

use crate::board::BoardEvent;

pub fn announce(event: &BoardEvent) -> String {
    match event {
        BoardEvent::DragStart { active } => format!("Picked up draggable item {active}."),
        BoardEvent::DragOver { active, over: Some(over) } => {
            format!("Draggable item {active} was moved over droppable area {over}.")
        }
        BoardEvent::DragOver { active, over: None } => {
            format!("Draggable item {active} is no longer over a droppable area.")
        }
        BoardEvent::DragEnd { active, over: Some(over) } => {
            format!("Draggable item {active} was dropped over droppable area {over}")
        }
        BoardEvent::DragEnd { active, over: None } => format!("Draggable item {active} was dropped."),
        BoardEvent::DragCancel { active } => {
            format!("Dragging was cancelled. Draggable item {active} was dropped.")
        }
    }
}
