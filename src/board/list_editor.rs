//! List editing after a completed drag gesture.
//!
//! Every function here is pure: it takes the current contents and returns new
//! ones. Indices come from a real drag gesture, so they are not validated; an
//! out-of-range index is a caller bug.

use super::{Board, DragResult, Item, Location};
use log::*;

/// Remove the item at `from` and reinsert it so that it lands at `to` of the
/// resulting sequence.
///
pub fn reorder(items: &[Item], from: usize, to: usize) -> Vec<Item> {
    let mut result = items.to_vec();
    let removed = result.remove(from);
    result.insert(to, removed);
    result
}

/// Move the item at `from.index` of `source` to `to.index` of `destination`.
///
/// When both locations name the same container the two slices are the same
/// contents, and both returned sequences are the single reordered one.
pub fn move_item(
    source: &[Item],
    destination: &[Item],
    from: &Location,
    to: &Location,
) -> (Vec<Item>, Vec<Item>) {
    if from.container == to.container {
        let reordered = reorder(source, from.index, to.index);
        return (reordered.clone(), reordered);
    }

    let mut source_clone = source.to_vec();
    let mut destination_clone = destination.to_vec();
    let removed = source_clone.remove(from.index);
    destination_clone.insert(to.index, removed);
    (source_clone, destination_clone)
}

/// Compute the board after a drag gesture completes.
///
/// A missing destination leaves the board unchanged. A drop inside the source
/// container reorders it; any other drop moves the item across containers.
pub fn apply_drag_end(board: &Board, result: &DragResult) -> Board {
    let destination = match &result.destination {
        Some(destination) => destination,
        None => {
            debug!("Item dropped outside any container, board unchanged");
            return board.clone();
        }
    };
    let source = &result.source;

    let source_container = match board.get(&source.container) {
        Some(container) => container,
        None => {
            warn!("Ignoring drop from unknown container '{}'", source.container);
            return board.clone();
        }
    };

    if source.container == destination.container {
        let items = reorder(&source_container.items, source.index, destination.index);
        return board.with_items(&source.container, items);
    }

    let destination_container = match board.get(&destination.container) {
        Some(container) => container,
        None => {
            warn!(
                "Ignoring drop onto unknown container '{}'",
                destination.container
            );
            return board.clone();
        }
    };

    let (source_items, destination_items) = move_item(
        &source_container.items,
        &destination_container.items,
        source,
        destination,
    );
    board
        .with_items(&source.container, source_items)
        .with_items(&destination.container, destination_items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{numbered_items, Container};

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(Item::id).collect()
    }

    fn sorted_ids(items: &[Item]) -> Vec<String> {
        let mut ids: Vec<String> = items.iter().map(|i| i.id().to_string()).collect();
        ids.sort();
        ids
    }

    fn two_column_board(left: usize, right: usize) -> Board {
        Board::new(vec![
            Container::new("primary", "Items", numbered_items(left, 0)),
            Container::new("secondary", "Selected", numbered_items(right, left)),
        ])
        .unwrap()
    }

    #[test]
    fn test_reorder_forward() {
        let items = numbered_items(5, 0);
        let result = reorder(&items, 0, 3);
        assert_eq!(
            ids(&result),
            vec!["item-1", "item-2", "item-3", "item-0", "item-4"]
        );
    }

    #[test]
    fn test_reorder_backward() {
        let items = numbered_items(5, 0);
        let result = reorder(&items, 4, 1);
        assert_eq!(
            ids(&result),
            vec!["item-0", "item-4", "item-1", "item-2", "item-3"]
        );
    }

    #[test]
    fn test_reorder_same_index_is_identity() {
        let items = numbered_items(4, 0);
        for i in 0..items.len() {
            assert_eq!(reorder(&items, i, i), items);
        }
    }

    #[test]
    fn test_reorder_preserves_length_and_ids() {
        let items = numbered_items(5, 0);
        for i in 0..items.len() {
            for j in 0..items.len() {
                let result = reorder(&items, i, j);
                assert_eq!(result.len(), items.len());
                assert_eq!(sorted_ids(&result), sorted_ids(&items));
                assert_eq!(result[j], items[i]);
            }
        }
    }

    #[test]
    fn test_reorder_inverse() {
        let items = numbered_items(5, 0);
        for i in 0..items.len() {
            for j in 0..items.len() {
                if i == j {
                    continue;
                }
                assert_eq!(reorder(&reorder(&items, i, j), j, i), items);
            }
        }
    }

    #[test]
    fn test_move_into_empty_container() {
        let source = numbered_items(3, 0);
        let (source, destination) = move_item(
            &source,
            &[],
            &Location::new("primary", 1),
            &Location::new("secondary", 0),
        );
        assert_eq!(ids(&source), vec!["item-0", "item-2"]);
        assert_eq!(ids(&destination), vec!["item-1"]);
    }

    #[test]
    fn test_move_preserves_counts_and_identity() {
        let source = numbered_items(4, 0);
        let destination = numbered_items(3, 4);
        for from in 0..source.len() {
            for to in 0..=destination.len() {
                let moved = source[from].clone();
                let (s, d) = move_item(
                    &source,
                    &destination,
                    &Location::new("primary", from),
                    &Location::new("secondary", to),
                );
                assert_eq!(s.len() + d.len(), source.len() + destination.len());
                assert_eq!(d[to], moved);
                assert!(s.iter().all(|item| item.id() != moved.id()));
            }
        }
    }

    #[test]
    fn test_move_within_same_container_matches_reorder() {
        let items = numbered_items(4, 0);
        let (s, d) = move_item(
            &items,
            &items,
            &Location::new("primary", 0),
            &Location::new("primary", 2),
        );
        let expected = reorder(&items, 0, 2);
        assert_eq!(s, expected);
        assert_eq!(d, expected);
    }

    #[test]
    fn test_drag_end_without_destination_is_noop() {
        let board = two_column_board(3, 2);
        let result = DragResult {
            source: Location::new("primary", 1),
            destination: None,
        };
        assert_eq!(apply_drag_end(&board, &result), board);
    }

    #[test]
    fn test_drag_end_same_container_reorders_only_that_container() {
        let board = two_column_board(5, 2);
        let result = DragResult {
            source: Location::new("primary", 0),
            destination: Some(Location::new("primary", 3)),
        };
        let updated = apply_drag_end(&board, &result);
        assert_eq!(
            ids(&updated.get(&"primary".into()).unwrap().items),
            vec!["item-1", "item-2", "item-3", "item-0", "item-4"]
        );
        assert_eq!(updated.get(&"secondary".into()), board.get(&"secondary".into()));
    }

    #[test]
    fn test_drag_end_across_containers_moves_item() {
        let board = two_column_board(3, 0);
        let result = DragResult {
            source: Location::new("primary", 1),
            destination: Some(Location::new("secondary", 0)),
        };
        let updated = apply_drag_end(&board, &result);
        assert_eq!(
            ids(&updated.get(&"primary".into()).unwrap().items),
            vec!["item-0", "item-2"]
        );
        assert_eq!(
            ids(&updated.get(&"secondary".into()).unwrap().items),
            vec!["item-1"]
        );
        assert_eq!(updated.item_count(), board.item_count());
    }

    #[test]
    fn test_drag_end_between_any_columns() {
        let board = Board::new(vec![
            Container::new("a", "A", numbered_items(2, 0)),
            Container::new("b", "B", numbered_items(2, 2)),
            Container::new("c", "C", numbered_items(2, 4)),
        ])
        .unwrap();
        let result = DragResult {
            source: Location::new("c", 0),
            destination: Some(Location::new("a", 2)),
        };
        let updated = apply_drag_end(&board, &result);
        assert_eq!(
            ids(&updated.get(&"a".into()).unwrap().items),
            vec!["item-0", "item-1", "item-4"]
        );
        assert_eq!(updated.get(&"b".into()), board.get(&"b".into()));
        assert_eq!(ids(&updated.get(&"c".into()).unwrap().items), vec!["item-5"]);
    }

    #[test]
    fn test_drag_end_with_unknown_container_is_noop() {
        let board = two_column_board(2, 2);
        let result = DragResult {
            source: Location::new("primary", 0),
            destination: Some(Location::new("archive", 0)),
        };
        assert_eq!(apply_drag_end(&board, &result), board);

        let result = DragResult {
            source: Location::new("archive", 0),
            destination: Some(Location::new("primary", 0)),
        };
        assert_eq!(apply_drag_end(&board, &result), board);
    }
}
