use crate::engine::Move;

// At most 60 empty cells exist on a board, so 64 always suffices.
const MAX_MOVES: usize = 64;

/// Fixed-capacity move buffer used by move generation and the searcher.
#[derive(Clone, Copy)]
pub struct MoveList {
    pub moves: [Move; MAX_MOVES],
    pub count: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self {
            moves: [Move::default(); MAX_MOVES],
            count: 0,
        }
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl MoveList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        if self.count < self.moves.len() {
            if let Some(slot) = self.moves.get_mut(self.count) {
                *slot = mv;
                self.count += 1;
            }
        } else {
            debug_assert!(false, "MoveList overflow! Max moves: {MAX_MOVES}");
        }
    }

    /// Pushes `mv` unless an equal move is already present.
    /// Returns whether the move was added.
    pub fn push_unique(&mut self, mv: Move) -> bool {
        if self.contains(mv) {
            return false;
        }
        self.push(mv);
        true
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.iter().any(|&m| m == mv)
    }

    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn first(&self) -> Option<Move> {
        self.iter().next().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.get(0..self.count).unwrap_or(&[]).iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        self.moves.get(0..self.count).unwrap_or(&[])
    }

    pub fn sort_by_key<K, F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> K,
        K: Ord,
    {
        if let Some(slice) = self.moves.get_mut(0..self.count) {
            slice.sort_by_key(f);
        }
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::iter::Take<std::array::IntoIter<Move, MAX_MOVES>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter().take(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_unique_rejects_duplicates() {
        let mut list = MoveList::new();
        assert!(list.push_unique(Move::new(3, 4)));
        assert!(!list.push_unique(Move::new(3, 4)));
        assert!(list.push_unique(Move::new(4, 3)));
        assert_eq!(list.len(), 2);
        assert!(list.contains(Move::new(4, 3)));
        assert!(!list.contains(Move::Pass));
    }

    #[test]
    fn test_into_iter_respects_count() {
        let mut list = MoveList::new();
        list.push(Move::new(1, 1));
        list.push(Move::new(2, 2));
        let collected: Vec<Move> = list.into_iter().collect();
        assert_eq!(collected, vec![Move::new(1, 1), Move::new(2, 2)]);
    }

    #[test]
    fn test_sort_by_key_is_stable() {
        let mut list = MoveList::new();
        for c in 1..=5 {
            list.push(Move::new(1, c));
        }
        list.sort_by_key(|mv| u8::from(*mv != Move::new(1, 4)));
        assert_eq!(list.len(), 5);
        assert_eq!(list.first(), Some(Move::new(1, 4)));
        assert_eq!(list.as_slice().get(1), Some(&Move::new(1, 1)));
        assert_eq!(list.as_slice().get(4), Some(&Move::new(1, 5)));
    }
}
