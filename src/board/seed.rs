//! Placeholder data for seeding a board.

use super::{Board, BoardError, Container, ContainerKey, Item};
use fake::{faker::lorem::en::Sentence, Fake};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How placeholder item content is generated.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// `item 0`, `item 1`, ...
    #[default]
    Numbered,
    /// Short lorem sentences.
    Lorem,
}

/// Describes one column to seed.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSeed {
    pub key: ContainerKey,
    pub title: String,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl ColumnSeed {
    pub fn new(key: &str, title: &str, count: usize) -> Self {
        ColumnSeed {
            key: ContainerKey::new(key),
            title: title.to_string(),
            count,
            offset: None,
        }
    }
}

/// Generate `count` items numbered from `offset`.
///
pub fn numbered_items(count: usize, offset: usize) -> Vec<Item> {
    (0..count)
        .map(|k| Item::new(format!("item-{}", k + offset), format!("item {}", k + offset)))
        .collect()
}

/// Generate `count` items numbered from `offset` with lorem content.
///
pub fn lorem_items<R: Rng>(count: usize, offset: usize, rng: &mut R) -> Vec<Item> {
    (0..count)
        .map(|k| {
            let content: String = Sentence(2..5).fake_with_rng(rng);
            Item::new(format!("item-{}", k + offset), content)
        })
        .collect()
}

/// Build a board from column seeds. Columns without an explicit offset
/// continue numbering where the previous column stopped.
///
pub fn seed_board(
    columns: &[ColumnSeed],
    placeholder: Placeholder,
    seed: u64,
) -> Result<Board, BoardError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut next_offset = 0;
    let mut containers = Vec::with_capacity(columns.len());

    for column in columns {
        let offset = column.offset.unwrap_or(next_offset);
        let items = match placeholder {
            Placeholder::Numbered => numbered_items(column.count, offset),
            Placeholder::Lorem => lorem_items(column.count, offset, &mut rng),
        };
        next_offset = next_offset.max(offset + column.count);
        containers.push(Container::new(column.key.clone(), column.title.clone(), items));
    }

    Board::new(containers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_items() {
        let items = numbered_items(3, 5);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id(), "item-5");
        assert_eq!(items[0].content(), "item 5");
        assert_eq!(items[2].id(), "item-7");
        assert!(numbered_items(0, 0).is_empty());
    }

    #[test]
    fn test_lorem_items_are_deterministic_for_a_seed() {
        let first = lorem_items(4, 0, &mut StdRng::seed_from_u64(7));
        let second = lorem_items(4, 0, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        assert_eq!(first[3].id(), "item-3");
        assert!(first.iter().all(|item| !item.content().is_empty()));
    }

    #[test]
    fn test_seed_board_continues_numbering() {
        let columns = vec![
            ColumnSeed::new("primary", "Items", 5),
            ColumnSeed::new("secondary", "Selected", 5),
        ];
        let board = seed_board(&columns, Placeholder::Numbered, 0).unwrap();
        let secondary = board.get(&"secondary".into()).unwrap();
        assert_eq!(secondary.title, "Selected");
        assert_eq!(secondary.items[0].id(), "item-5");
        assert_eq!(secondary.items[4].id(), "item-9");
        assert_eq!(board.item_count(), 10);
    }

    #[test]
    fn test_seed_board_rejects_overlapping_offsets() {
        let mut second = ColumnSeed::new("secondary", "Selected", 2);
        second.offset = Some(1);
        let columns = vec![ColumnSeed::new("primary", "Items", 3), second];
        let result = seed_board(&columns, Placeholder::Numbered, 0);
        assert_eq!(result, Err(BoardError::DuplicateItemId("item-1".to_string())));
    }

    #[test]
    fn test_seed_board_lorem_keeps_ids() {
        let columns = vec![ColumnSeed::new("primary", "Items", 2)];
        let board = seed_board(&columns, Placeholder::Lorem, 42).unwrap();
        let items = &board.get(&"primary".into()).unwrap().items;
        assert_eq!(items[1].id(), "item-1");
        assert_ne!(items[1].content(), "item 1");
    }

    #[test]
    fn test_placeholder_serde() {
        let parsed: Placeholder = serde_yaml::from_str("lorem").unwrap();
        assert_eq!(parsed, Placeholder::Lorem);
        assert_eq!(Placeholder::default(), Placeholder::Numbered);
    }
}
