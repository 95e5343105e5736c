//! Hexagonal board: bounds, blocked cells, adjacency and move execution

use rustc_hash::FxHashSet;

use crate::error::{BoardError, InvalidMoveReason};
use crate::hex::{Hex, DIRECTIONS};

/// Board radius used when none is given
pub const DEFAULT_BOARD_SIZE: u32 = 5;

/// A hexagon of radius `size` centred on the origin, plus the cells
/// that have been blocked so far.
///
/// Every cell in `blocked` was in bounds when it was inserted:
/// [`Board::execute_move`] is the only way in and it checks first.
#[derive(Clone, Debug)]
pub struct Board {
    size: u32,
    blocked: FxHashSet<Hex>,
}

impl Board {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            blocked: FxHashSet::default(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Clear every blocked cell.
    ///
    /// Returns a snapshot of the blocked set, which is always empty here.
    /// The snapshot is owned by the caller and detached from the board.
    pub fn initialize(&mut self) -> FxHashSet<Hex> {
        self.blocked.clear();
        self.blocked.clone()
    }

    /// Read-only view of the blocked cells
    pub fn blocked_cells(&self) -> &FxHashSet<Hex> {
        &self.blocked
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }

    /// Number of cells on the board: `3n² + 3n + 1`, saturating at `u64::MAX`
    pub fn cell_count(&self) -> u64 {
        let n = self.size as u64;
        n.saturating_mul(n)
            .saturating_mul(3)
            .saturating_add(n.saturating_mul(3))
            .saturating_add(1)
    }

    /// Check if `pos` lies on the board: |q|, |r| and |s| all within `size`
    pub fn is_in_bounds(&self, pos: Hex) -> bool {
        let size = self.size as i64;
        (pos.q as i64).abs() <= size && (pos.r as i64).abs() <= size && pos.s().abs() <= size
    }

    /// Check if `pos` is on the outermost ring
    pub fn is_on_edge(&self, pos: Hex) -> bool {
        self.is_in_bounds(pos) && pos.distance_to_center() == self.size as i64
    }

    pub fn is_blocked(&self, pos: Hex) -> bool {
        self.blocked.contains(&pos)
    }

    /// Neighbors of `pos` that are on the board and not blocked, in
    /// [`DIRECTIONS`] order.
    pub fn adjacent_positions(&self, pos: Hex) -> Vec<Hex> {
        (0..DIRECTIONS.len() as u8)
            .filter_map(|dir| pos.checked_neighbor(dir))
            .filter(|&n| self.is_in_bounds(n) && !self.is_blocked(n))
            .collect()
    }

    /// Every on-board cell for which `predicate` holds.
    ///
    /// Results come in scan order: `q` ascending, then `r` ascending.
    /// Only the cells of the hexagon are visited, never the corners of
    /// the bounding square.
    pub fn positions_where<F>(&self, mut predicate: F) -> Vec<Hex>
    where
        F: FnMut(&Hex) -> bool,
    {
        let size = self.size as i64;
        let lo = (-size).max(i32::MIN as i64);
        let hi = size.min(i32::MAX as i64);

        let mut result = Vec::new();
        for q in lo..=hi {
            let r_lo = lo.max(-q - size);
            let r_hi = hi.min(size - q);
            for r in r_lo..=r_hi {
                // both axes were clamped to the i32 range above
                let pos = Hex::new(q as i32, r as i32);
                if self.is_in_bounds(pos) && predicate(&pos) {
                    result.push(pos);
                }
            }
        }
        result
    }

    /// A move is valid when the cell is on the board and still free
    pub fn is_valid_move(&self, pos: Hex) -> bool {
        self.is_in_bounds(pos) && !self.is_blocked(pos)
    }

    /// Same validation as [`Board::is_valid_move`], with the failure reason
    pub fn check_move(&self, pos: Hex) -> Result<(), BoardError> {
        let reason = if !self.is_in_bounds(pos) {
            InvalidMoveReason::OutOfBounds
        } else if self.is_blocked(pos) {
            InvalidMoveReason::AlreadyBlocked
        } else {
            return Ok(());
        };
        Err(BoardError::InvalidMove { pos, reason })
    }

    /// Block `pos`. Leaves the board untouched when the move is invalid.
    pub fn execute_move(&mut self, pos: Hex) -> Result<(), BoardError> {
        self.check_move(pos)?;
        self.blocked.insert(pos);
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> Board {
        Board::new(2)
    }

    #[test]
    fn test_bounds() {
        let board = small_board();
        assert!(board.is_in_bounds(Hex::new(0, 0)));
        assert!(board.is_in_bounds(Hex::new(1, -1)));
        assert!(board.is_in_bounds(Hex::new(2, -2)));
        assert!(!board.is_in_bounds(Hex::new(3, 0)));
        assert!(!board.is_in_bounds(Hex::new(-3, 1)));
        assert!(!board.is_in_bounds(Hex::new(2, 1))); // s = -3
        assert!(!board.is_in_bounds(Hex::new(i32::MIN, i32::MAX)));
    }

    #[test]
    fn test_execute_and_is_blocked() {
        let mut board = small_board();
        let pos = Hex::new(1, -1);
        assert!(!board.is_blocked(pos));
        board.execute_move(pos).unwrap();
        assert!(board.is_blocked(pos));
        assert!(!board.is_valid_move(pos));
    }

    #[test]
    fn test_is_valid_move() {
        let mut board = small_board();
        let valid = Hex::new(1, -1);
        let invalid = Hex::new(3, 0);
        board.execute_move(valid).unwrap();

        assert!(board.is_valid_move(Hex::new(0, 0)));
        assert!(!board.is_valid_move(valid));
        assert!(!board.is_valid_move(invalid));
    }

    #[test]
    fn test_execute_move_errors() {
        let mut board = small_board();
        board.execute_move(Hex::new(0, 1)).unwrap();

        assert_eq!(
            board.execute_move(Hex::new(0, 1)),
            Err(BoardError::InvalidMove {
                pos: Hex::new(0, 1),
                reason: InvalidMoveReason::AlreadyBlocked,
            })
        );
        assert_eq!(
            board.execute_move(Hex::new(0, 3)),
            Err(BoardError::InvalidMove {
                pos: Hex::new(0, 3),
                reason: InvalidMoveReason::OutOfBounds,
            })
        );
        assert_eq!(board.blocked_count(), 1);
    }

    #[test]
    fn test_adjacent_positions() {
        let mut board = small_board();
        let center = Hex::ORIGIN;
        let neighbors = board.adjacent_positions(center);

        assert_eq!(neighbors.len(), 6);
        let expected: Vec<Hex> = DIRECTIONS.iter().map(|&(q, r)| Hex::new(q, r)).collect();
        assert_eq!(neighbors, expected);

        board.execute_move(neighbors[0]).unwrap();
        let updated = board.adjacent_positions(center);
        assert_eq!(updated.len(), 5);
        assert!(!updated.contains(&neighbors[0]));
    }

    #[test]
    fn test_adjacent_positions_at_corner() {
        let board = small_board();
        // corner cell: three neighbors fall off the board
        let corner = Hex::new(2, 0);
        let neighbors = board.adjacent_positions(corner);
        assert_eq!(neighbors, vec![Hex::new(1, 1), Hex::new(1, 0), Hex::new(2, -1)]);
    }

    #[test]
    fn test_size_zero_board() {
        let mut board = Board::new(0);
        assert_eq!(board.positions_where(|_| true), vec![Hex::ORIGIN]);
        assert!(board.adjacent_positions(Hex::ORIGIN).is_empty());
        assert!(board.is_on_edge(Hex::ORIGIN));
        board.execute_move(Hex::ORIGIN).unwrap();
        assert!(board.execute_move(Hex::ORIGIN).is_err());
    }

    #[test]
    fn test_positions_where() {
        let mut board = small_board();
        board.execute_move(Hex::new(0, 0)).unwrap();
        board.execute_move(Hex::new(1, -1)).unwrap();

        let free = board.positions_where(|&p| !board.is_blocked(p));
        assert_eq!(free.len(), 19 - 2);
        assert!(!free.contains(&Hex::new(0, 0)));
        assert!(!free.contains(&Hex::new(1, -1)));
    }

    #[test]
    fn test_positions_where_scan_order() {
        let board = Board::new(1);
        assert_eq!(
            board.positions_where(|_| true),
            vec![
                Hex::new(-1, 0),
                Hex::new(-1, 1),
                Hex::new(0, -1),
                Hex::new(0, 0),
                Hex::new(0, 1),
                Hex::new(1, -1),
                Hex::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_initialize() {
        let mut board = small_board();
        board.execute_move(Hex::new(0, 0)).unwrap();
        let cleared = board.initialize();
        assert!(cleared.is_empty());
        assert!(!board.is_blocked(Hex::new(0, 0)));
        assert!(board.initialize().is_empty());
    }

    #[test]
    fn test_initialize_snapshot_is_detached() {
        let mut board = small_board();
        let mut snapshot = board.initialize();
        snapshot.insert(Hex::new(5, 5));
        assert!(!board.is_blocked(Hex::new(5, 5)));
        assert_eq!(board.blocked_count(), 0);
    }

    #[test]
    fn test_edge() {
        let board = small_board();
        assert!(board.is_on_edge(Hex::new(2, -1)));
        assert!(board.is_on_edge(Hex::new(-2, 2)));
        assert!(!board.is_on_edge(Hex::new(1, 0)));
        assert!(!board.is_on_edge(Hex::new(3, 0)));
        assert_eq!(board.positions_where(|&p| board.is_on_edge(p)).len(), 12);
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(Board::new(0).cell_count(), 1);
        assert_eq!(Board::new(2).cell_count(), 19);
        assert_eq!(Board::default().cell_count(), 91);
        assert_eq!(Board::new(u32::MAX).cell_count(), u64::MAX);
    }
}
