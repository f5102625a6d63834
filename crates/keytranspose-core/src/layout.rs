// Keytranspose Key Adjacency Graph
// Static QWERTY neighbor table for the alphabetic block

use std::sync::OnceLock;

use crate::{Direction, Key};
use crate::key::KEY_COUNT;

/// Neighbors of one key, indexed by `Direction::index()` (up, right, down, left)
pub type Neighbors = [Option<Key>; 4];

/// QWERTY layout as written on the physical board.
///
/// Columns follow `Direction` order: up, right, down, left. Keys next to
/// punctuation (`p`, `l`, `k`, `m`) have no letter neighbor on that side.
const QWERTY_TABLE: [(char, [Option<char>; 4]); KEY_COUNT] = [
    ('q', [None, Some('w'), Some('a'), None]),
    ('w', [None, Some('e'), Some('s'), Some('q')]),
    ('e', [None, Some('r'), Some('d'), Some('w')]),
    ('r', [None, Some('t'), Some('f'), Some('e')]),
    ('t', [None, Some('y'), Some('g'), Some('r')]),
    ('y', [None, Some('u'), Some('h'), Some('t')]),
    ('u', [None, Some('i'), Some('j'), Some('y')]),
    ('i', [None, Some('o'), Some('k'), Some('u')]),
    ('o', [None, Some('p'), Some('l'), Some('i')]),
    ('p', [None, None, None, Some('o')]),
    ('a', [Some('q'), Some('s'), Some('z'), None]),
    ('s', [Some('w'), Some('d'), Some('x'), Some('a')]),
    ('d', [Some('e'), Some('f'), Some('c'), Some('s')]),
    ('f', [Some('r'), Some('g'), Some('v'), Some('d')]),
    ('g', [Some('t'), Some('h'), Some('b'), Some('f')]),
    ('h', [Some('y'), Some('j'), Some('n'), Some('g')]),
    ('j', [Some('u'), Some('k'), Some('m'), Some('h')]),
    ('k', [Some('i'), Some('l'), None, Some('j')]),
    ('l', [Some('o'), None, None, Some('k')]),
    ('z', [Some('a'), Some('x'), None, None]),
    ('x', [Some('s'), Some('c'), None, Some('z')]),
    ('c', [Some('d'), Some('v'), None, Some('x')]),
    ('v', [Some('f'), Some('b'), None, Some('c')]),
    ('b', [Some('g'), Some('n'), None, Some('v')]),
    ('n', [Some('h'), Some('m'), None, Some('b')]),
    ('m', [Some('j'), None, None, Some('n')]),
];

/// Adjacency graph over the letter keys.
///
/// Every neighbor stored here is itself a `Key`, so lookups can never
/// produce a dangling reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    neighbors: [Neighbors; KEY_COUNT],
}

impl KeyboardLayout {
    /// The standard US QWERTY layout
    pub fn qwerty() -> &'static KeyboardLayout {
        static QWERTY: OnceLock<KeyboardLayout> = OnceLock::new();
        QWERTY.get_or_init(|| KeyboardLayout::from_table(&QWERTY_TABLE))
    }

    fn from_table(table: &[(char, [Option<char>; 4])]) -> Self {
        let mut neighbors = [[None; 4]; KEY_COUNT];
        for (letter, row) in table {
            // The table is literal data; a non-letter entry is simply skipped.
            let Some(key) = Key::from_char(*letter) else {
                continue;
            };
            for (slot, neighbor) in neighbors[key.index()].iter_mut().zip(row) {
                *slot = neighbor.and_then(Key::from_char);
            }
        }
        Self { neighbors }
    }

    /// The key one step away from `key` in `direction`, if there is one
    pub fn neighbor(&self, key: Key, direction: Direction) -> Option<Key> {
        self.neighbors[key.index()][direction.index()]
    }

    /// All four neighbors of `key`
    pub fn neighbors(&self, key: Key) -> &Neighbors {
        &self.neighbors[key.index()]
    }

    /// Keys that have at least one neighbor
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        Key::all().filter(|key| self.neighbors(*key).iter().any(Option::is_some))
    }

    /// Check whether a key is part of the graph
    pub fn contains(&self, key: Key) -> bool {
        self.neighbors(key).iter().any(Option::is_some)
    }
}
