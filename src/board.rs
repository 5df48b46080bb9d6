//! Board State Transitions
//!
//! Moves item ids between containers in response to drag events.
//! Every transition is a pure function of the previous state.

use crate::models::Board;

/// Board plus the item currently being dragged
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    pub board: Board,
    pub active_id: Option<String>,
}

/// Drag lifecycle, in gesture order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    DragStart { active: String },
    DragOver { active: String, over: Option<String> },
    DragEnd { active: String, over: Option<String> },
    DragCancel { active: String },
}

/// Where the dragged item lands in the destination sequence
///
/// Hovering a container's own drop area yields `len + 1`, as does a target
/// missing from the sequence. Hovering the last item inserts after it.
/// Indices past the end append.
pub fn insertion_index(dest: &[String], over_id: &str, over_is_container: bool) -> usize {
    if over_is_container {
        return dest.len() + 1;
    }
    match dest.iter().position(|i| i == over_id) {
        Some(idx) if idx + 1 == dest.len() => idx + 1,
        Some(idx) => idx,
        None => dest.len() + 1,
    }
}

impl Board {
    /// Live cross-container move while hovering `over`
    ///
    /// `None` when either side is unresolved or both resolve to the same container.
    pub fn move_across(&self, active: &str, over: &str) -> Option<Board> {
        let (Some(source), Some(dest)) = (self.find_container(active), self.find_container(over)) else {
            log::debug!("drag over unresolved: active={active} over={over}");
            return None;
        };
        if source == dest || !self.contains_item(active) {
            return None;
        }
        let (source, dest) = (source.to_string(), dest.to_string());
        let over_is_container = self.is_container(over);

        let mut next = self.clone();
        let dest_items = next.container_mut(&dest)?;
        let index = insertion_index(&dest_items.items, over, over_is_container);
        let at = index.min(dest_items.items.len());
        dest_items.items.insert(at, active.to_string());

        next.container_mut(&source)?.items.retain(|i| i != active);

        log::debug!("moved {active} from {source} to {dest} at {at}");
        Some(next)
    }

    /// Final reorder on drop inside the owning container
    ///
    /// `None` when containers differ, either side is unresolved, or the
    /// item is already in place. Dropping on the container's own area
    /// moves the item to the end.
    pub fn reorder_within(&self, active: &str, over: &str) -> Option<Board> {
        let (Some(source), Some(dest)) = (self.find_container(active), self.find_container(over)) else {
            log::debug!("drag end unresolved: active={active} over={over}");
            return None;
        };
        if source != dest {
            return None;
        }
        let container = self.container(dest)?;
        let from = container.position(active)?;
        let to = if over == container.id {
            container.items.len().checked_sub(1)?
        } else {
            container.position(over)?
        };
        if from == to {
            return None;
        }

        let dest = dest.to_string();
        let mut next = self.clone();
        let items = &mut next.container_mut(&dest)?.items;
        let item = items.remove(from);
        items.insert(to, item);

        log::debug!("reordered {active} in {dest}: {from} -> {to}");
        Some(next)
    }
}

/// (state, event) -> next state
pub fn reduce(state: &BoardState, event: &BoardEvent) -> BoardState {
    match event {
        BoardEvent::DragStart { active } => {
            if !state.board.contains_item(active) {
                log::debug!("drag start on unknown item {active}");
                return state.clone();
            }
            BoardState {
                board: state.board.clone(),
                active_id: Some(active.clone()),
            }
        }
        BoardEvent::DragOver { active, over } => {
            let moved = over.as_deref().and_then(|over| state.board.move_across(active, over));
            match moved {
                Some(board) => BoardState {
                    board,
                    active_id: state.active_id.clone(),
                },
                None => state.clone(),
            }
        }
        BoardEvent::DragEnd { active, over } => {
            let board = over
                .as_deref()
                .and_then(|over| state.board.reorder_within(active, over))
                .unwrap_or_else(|| state.board.clone());
            BoardState { board, active_id: None }
        }
        BoardEvent::DragCancel { .. } => BoardState {
            board: state.board.clone(),
            active_id: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Container;

    fn ids(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn items<'a>(state: &'a BoardState, container: &str) -> Vec<&'a str> {
        state.board.items(container).unwrap().iter().map(String::as_str).collect()
    }

    fn over(active: &str, over: &str) -> BoardEvent {
        BoardEvent::DragOver { active: active.into(), over: Some(over.into()) }
    }

    fn end(active: &str, over: &str) -> BoardEvent {
        BoardEvent::DragEnd { active: active.into(), over: Some(over.into()) }
    }

    fn start(active: &str) -> BoardEvent {
        BoardEvent::DragStart { active: active.into() }
    }

    fn run(events: &[BoardEvent]) -> BoardState {
        events.iter().fold(BoardState::default(), |s, e| reduce(&s, e))
    }

    fn assert_every_item_once(state: &BoardState) {
        let mut all: Vec<_> = state.board.containers.iter().flat_map(|c| c.items.iter().cloned()).collect();
        all.sort();
        assert_eq!(all, ids(&["1", "2", "3", "4", "5", "6", "7", "8", "9"]));
    }

    #[test]
    fn test_insertion_index() {
        let dest = ids(&["7", "8", "9"]);
        assert_eq!(insertion_index(&dest, "7", false), 0);
        assert_eq!(insertion_index(&dest, "8", false), 1);
        // Last item: insert after it
        assert_eq!(insertion_index(&dest, "9", false), 3);
        assert_eq!(insertion_index(&dest, "container2", true), 4);
        assert_eq!(insertion_index(&dest, "missing", false), 4);
        assert_eq!(insertion_index(&[], "container3", true), 1);
    }

    #[test]
    fn test_drag_into_empty_container() {
        let state = run(&[start("2"), over("2", "container3")]);
        assert_eq!(items(&state, "root"), vec!["1", "3"]);
        assert_eq!(items(&state, "container3"), vec!["2"]);
        assert_eq!(items(&state, "container1"), vec!["4", "5", "6"]);
        assert_eq!(items(&state, "container2"), vec!["7", "8", "9"]);
        assert_eq!(state.active_id.as_deref(), Some("2"));

        let after_end = reduce(&state, &end("2", "container3"));
        assert_eq!(after_end.board, state.board);
        assert_eq!(after_end.active_id, None);
    }

    #[test]
    fn test_drag_over_last_item_inserts_after() {
        let state = run(&[start("5"), over("5", "9")]);
        assert_eq!(items(&state, "container1"), vec!["4", "6"]);
        assert_eq!(items(&state, "container2"), vec!["7", "8", "9", "5"]);
    }

    #[test]
    fn test_leaving_then_entering_on_item_inserts_at_item() {
        // Pointer crosses container1's empty area, leaves it, then lands on 7
        let state = run(&[
            start("5"),
            over("5", "container1"),
            BoardEvent::DragOver { active: "5".into(), over: None },
            over("5", "7"),
        ]);
        assert_eq!(items(&state, "container1"), vec!["4", "6"]);
        assert_eq!(items(&state, "container2"), vec!["5", "7", "8", "9"]);
    }

    #[test]
    fn test_drag_over_middle_item_inserts_before() {
        let state = run(&[start("1"), over("1", "8")]);
        assert_eq!(items(&state, "root"), vec!["2", "3"]);
        assert_eq!(items(&state, "container2"), vec!["7", "1", "8", "9"]);
    }

    #[test]
    fn test_drag_over_container_appends() {
        let state = run(&[start("1"), over("1", "container1")]);
        assert_eq!(items(&state, "container1"), vec!["4", "5", "6", "1"]);
    }

    #[test]
    fn test_drag_over_same_container_is_noop() {
        let before = BoardState::default();
        let state = reduce(&before, &over("1", "3"));
        assert_eq!(state, before);
        let state = reduce(&before, &over("1", "root"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_unresolved_ids_are_noops() {
        let before = BoardState::default();
        assert_eq!(reduce(&before, &over("1", "nowhere")), before);
        assert_eq!(reduce(&before, &over("nothing", "4")), before);
        assert_eq!(reduce(&before, &BoardEvent::DragOver { active: "1".into(), over: None }), before);
        assert_eq!(reduce(&before, &start("nothing")), before);
    }

    #[test]
    fn test_container_id_is_not_draggable() {
        let before = BoardState::default();
        assert_eq!(reduce(&before, &over("container3", "4")), before);
    }

    #[test]
    fn test_reorder_within_container() {
        let state = run(&[start("1"), end("1", "3")]);
        assert_eq!(items(&state, "root"), vec!["2", "3", "1"]);
        assert_eq!(state.active_id, None);

        let state = run(&[start("6"), end("6", "4")]);
        assert_eq!(items(&state, "container1"), vec!["6", "4", "5"]);
        // Other containers untouched
        assert_eq!(items(&state, "root"), vec!["1", "2", "3"]);
        assert_eq!(items(&state, "container2"), vec!["7", "8", "9"]);
    }

    #[test]
    fn test_drop_on_own_position_changes_nothing() {
        let before = reduce(&BoardState::default(), &start("5"));
        let after = reduce(&before, &end("5", "5"));
        assert_eq!(after.board, before.board);
        assert_eq!(after.active_id, None);
    }

    #[test]
    fn test_drop_on_own_container_area_moves_to_end() {
        let state = run(&[start("4"), end("4", "container1")]);
        assert_eq!(items(&state, "container1"), vec!["5", "6", "4"]);
    }

    #[test]
    fn test_drag_end_clears_active_even_without_target() {
        let state = run(&[start("4"), BoardEvent::DragEnd { active: "4".into(), over: None }]);
        assert_eq!(state.active_id, None);
        assert_eq!(state.board, Board::seed());

        // Cross-container drop already applied during drag-over
        let state = run(&[start("4"), over("4", "7"), end("4", "nowhere")]);
        assert_eq!(state.active_id, None);
        assert_eq!(items(&state, "container2"), vec!["4", "7", "8", "9"]);
    }

    #[test]
    fn test_cancel_clears_active_only() {
        let state = run(&[start("3"), over("3", "container3")]);
        let cancelled = reduce(&state, &BoardEvent::DragCancel { active: "3".into() });
        assert_eq!(cancelled.active_id, None);
        assert_eq!(cancelled.board, state.board);
    }

    #[test]
    fn test_every_target_preserves_items() {
        let seed = Board::seed();
        let targets: Vec<String> = seed
            .containers
            .iter()
            .flat_map(|c| std::iter::once(c.id.clone()).chain(c.items.iter().cloned()))
            .collect();

        let mut state = BoardState::default();
        for active in ids(&["1", "2", "3", "4", "5", "6", "7", "8", "9"]) {
            state = reduce(&state, &BoardEvent::DragStart { active: active.clone() });
            for target in &targets {
                state = reduce(&state, &BoardEvent::DragOver { active: active.clone(), over: Some(target.clone()) });
                assert_every_item_once(&state);
            }
            state = reduce(&state, &BoardEvent::DragEnd { active: active.clone(), over: Some("3".into()) });
            assert_every_item_once(&state);
            assert_eq!(state.board.containers.len(), 4);
        }
    }

    #[test]
    fn test_move_preserves_relative_order() {
        let board = Board {
            containers: vec![
                Container::new("a", &["x", "y", "z"]),
                Container::new("b", &["p", "q"]),
            ],
        };
        let next = board.move_across("y", "p").unwrap();
        assert_eq!(next.items("a").unwrap(), &ids(&["x", "z"])[..]);
        assert_eq!(next.items("b").unwrap(), &ids(&["y", "p", "q"])[..]);
    }
}
