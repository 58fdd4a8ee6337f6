use std::ops::Index;

use ndarray::Array2;
use rand::Rng;

use crate::error::{ConfigError, Result};

/// `(row, col)`, zero based
pub type Coord = (usize, usize);

/// Per-cell boolean state, indexed like the board
pub type Mask = Array2<bool>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Square {
    #[default]
    Empty,
    Nearby(u8),
    Mine,
}

impl Square {
    pub fn is_mine(self) -> bool {
        matches!(self, Square::Mine)
    }
}

const NEIGHBOUR_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The up to 8 cells touching `(row, col)` on a `rows` x `cols` grid.
pub fn neighbours((rows, cols): (usize, usize), (row, col): Coord) -> impl Iterator<Item = Coord> {
    NEIGHBOUR_DELTAS.into_iter().filter_map(move |(row_delta, col_delta)| {
        let next_row = row.checked_add_signed(row_delta)?;
        let next_col = col.checked_add_signed(col_delta)?;
        (next_row < rows && next_col < cols).then_some((next_row, next_col))
    })
}

/// The clicked cell plus its neighbours, none of which may hold a mine.
pub fn safe_zone(dim: (usize, usize), origin: Coord) -> impl Iterator<Item = Coord> {
    std::iter::once(origin).chain(neighbours(dim, origin))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    squares: Array2<Square>,
    mines: usize,
}

impl Board {
    /// Places `mines` mines uniformly at random outside the safe zone around
    /// `safe_origin` and fills in the adjacency counts.
    pub fn generate<R: Rng>(
        width: usize,
        height: usize,
        mines: usize,
        safe_origin: Coord,
        rng: &mut R,
    ) -> Result<Self> {
        assert!(
            safe_origin.0 < height && safe_origin.1 < width,
            "safe origin {safe_origin:?} outside {width}x{height} board"
        );

        let dim = (height, width);
        let safe_cells = safe_zone(dim, safe_origin).collect::<Vec<_>>();
        let usable = width * height - safe_cells.len();
        if mines > usable {
            return Err(ConfigError::TooManyMines { mines, usable });
        }

        let mut squares = Array2::from_elem(dim, Square::Empty);
        let mut mines_left = mines;
        while mines_left > 0 {
            let pos = (rng.random_range(0..height), rng.random_range(0..width));

            if safe_cells.contains(&pos) || squares[pos].is_mine() {
                continue;
            }

            squares[pos] = Square::Mine;
            mines_left -= 1;
        }

        log::debug!("placed {mines} mines around safe origin {safe_origin:?}");
        Ok(Self::with_counts(squares))
    }

    /// Builds a board with mines exactly at `mine_coords`.
    pub fn from_mines(width: usize, height: usize, mine_coords: &[Coord]) -> Self {
        let mut squares = Array2::from_elem((height, width), Square::Empty);
        for &pos in mine_coords {
            squares[pos] = Square::Mine;
        }
        Self::with_counts(squares)
    }

    fn with_counts(mut squares: Array2<Square>) -> Self {
        let dim = squares.dim();
        let mut mines = 0;

        for row in 0..dim.0 {
            for col in 0..dim.1 {
                if squares[(row, col)].is_mine() {
                    mines += 1;
                    continue;
                }

                let nearby = neighbours(dim, (row, col))
                    .filter(|&pos| squares[pos].is_mine())
                    .count() as u8;

                squares[(row, col)] = match nearby {
                    0 => Square::Empty,
                    n => Square::Nearby(n),
                };
            }
        }

        Board { squares, mines }
    }

    /// `(height, width)`, the shape of every mask that goes with this board
    pub fn dim(&self) -> (usize, usize) {
        self.squares.dim()
    }

    pub fn width(&self) -> usize {
        self.dim().1
    }

    pub fn height(&self) -> usize {
        self.dim().0
    }

    pub fn mine_count(&self) -> usize {
        self.mines
    }

    pub fn square(&self, pos: Coord) -> Square {
        self.squares[pos]
    }

    pub fn is_mine(&self, pos: Coord) -> bool {
        self.squares[pos].is_mine()
    }

    pub fn contains(&self, (row, col): Coord) -> bool {
        let (height, width) = self.dim();
        row < height && col < width
    }

    /// Iterates every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (height, width) = self.dim();
        (0..height).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }

    /// Checks if all squares except the mines are opened. Flags play no part.
    pub fn is_cleared(&self, revealed: &Mask) -> bool {
        self.squares
            .iter()
            .zip(revealed.iter())
            .all(|(square, &open)| square.is_mine() || open)
    }
}

impl Index<Coord> for Board {
    type Output = Square;

    fn index(&self, pos: Coord) -> &Self::Output {
        &self.squares[pos]
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn chebyshev((a_row, a_col): Coord, (b_row, b_col): Coord) -> usize {
        a_row.abs_diff(b_row).max(a_col.abs_diff(b_col))
    }

    #[test]
    fn neighbours_are_clipped_at_edges() {
        assert_eq!(neighbours((9, 9), (0, 0)).count(), 3);
        assert_eq!(neighbours((9, 9), (0, 4)).count(), 5);
        assert_eq!(neighbours((9, 9), (4, 4)).count(), 8);
        assert_eq!(neighbours((1, 1), (0, 0)).count(), 0);
    }

    #[test]
    fn generated_boards_keep_mine_count_and_safe_zone() {
        let mut rng = StdRng::seed_from_u64(7);

        for seed_round in 0..50 {
            let origin = (seed_round % 16, (seed_round * 7) % 30);
            let board = Board::generate(30, 16, 99, origin, &mut rng).unwrap();

            let mines = board.coords().filter(|&pos| board.is_mine(pos)).count();
            assert_eq!(mines, 99);
            assert_eq!(board.mine_count(), 99);

            for pos in board.coords().filter(|&pos| chebyshev(pos, origin) <= 1) {
                assert!(!board.is_mine(pos), "mine at {pos:?} next to {origin:?}");
            }
        }
    }

    #[test]
    fn beginner_first_click_in_the_middle() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::generate(9, 9, 10, (4, 4), &mut rng).unwrap();

        assert_eq!(board.coords().filter(|&pos| board.is_mine(pos)).count(), 10);
        for row in 3..=5 {
            for col in 3..=5 {
                assert!(!board.is_mine((row, col)));
            }
        }
    }

    #[test]
    fn adjacency_counts_match_neighbourhood() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::generate(16, 16, 40, (0, 15), &mut rng).unwrap();

        for pos in board.coords() {
            let expected = neighbours(board.dim(), pos)
                .filter(|&n| board.is_mine(n))
                .count() as u8;
            match board[pos] {
                Square::Mine => {}
                Square::Empty => assert_eq!(expected, 0, "{pos:?}"),
                Square::Nearby(n) => assert_eq!(n, expected, "{pos:?}"),
            }
        }
    }

    #[test]
    fn same_seed_gives_same_board() {
        let a = Board::generate(9, 9, 10, (0, 0), &mut StdRng::seed_from_u64(11)).unwrap();
        let b = Board::generate(9, 9, 10, (0, 0), &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_mines_that_cannot_fit() {
        let mut rng = StdRng::seed_from_u64(0);

        // corner click only protects 4 cells
        let err = Board::generate(3, 3, 6, (0, 0), &mut rng).unwrap_err();
        assert_eq!(err, ConfigError::TooManyMines { mines: 6, usable: 5 });

        let full = Board::generate(3, 3, 5, (0, 0), &mut rng).unwrap();
        assert_eq!(full.mine_count(), 5);
    }

    #[test]
    fn empty_board_allows_full_safe_zone() {
        let mut rng = StdRng::seed_from_u64(0);
        let board = Board::generate(3, 3, 0, (1, 1), &mut rng).unwrap();
        assert!(board.coords().all(|pos| board[pos] == Square::Empty));
    }

    #[test]
    fn cleared_ignores_unrevealed_mines() {
        let board = Board::from_mines(2, 1, &[(0, 0)]);
        let mut revealed = Mask::from_elem(board.dim(), false);
        assert!(!board.is_cleared(&revealed));

        revealed[(0, 1)] = true;
        assert!(board.is_cleared(&revealed));
    }
}
