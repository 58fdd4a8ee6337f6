use crate::board::{neighbours, Board, Coord, Mask, Square};

/// Opens `origin` and floods through every connected empty square.
///
/// Squares with mines nearby are opened but stop the flood. A mine at
/// `origin` is opened on its own, deciding the outcome is up to the caller.
/// Flagged squares are never opened. Returns the newly opened coordinates.
pub fn reveal(board: &Board, revealed: &mut Mask, flags: &Mask, origin: Coord) -> Vec<Coord> {
    let mut opened = Vec::new();
    let mut stack = vec![origin];

    while let Some(pos) = stack.pop() {
        if revealed[pos] || flags[pos] {
            continue;
        }

        revealed[pos] = true;
        opened.push(pos);

        if board[pos] != Square::Empty {
            continue;
        }

        stack.extend(neighbours(board.dim(), pos).filter(|&next| !revealed[next] && !flags[next]));
    }

    opened
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn masks(board: &Board) -> (Mask, Mask) {
        (
            Mask::from_elem(board.dim(), false),
            Mask::from_elem(board.dim(), false),
        )
    }

    #[test]
    fn mine_free_board_opens_in_one_call() {
        let board = Board::from_mines(3, 3, &[]);
        let (mut revealed, flags) = masks(&board);

        let opened = reveal(&board, &mut revealed, &flags, (1, 1));

        assert_eq!(opened.len(), 9);
        assert!(revealed.iter().all(|&open| open));
        assert!(board.is_cleared(&revealed));
    }

    #[test]
    fn numbered_square_does_not_spread() {
        let board = Board::from_mines(3, 3, &[(0, 0)]);
        let (mut revealed, flags) = masks(&board);

        let opened = reveal(&board, &mut revealed, &flags, (1, 1));

        assert_eq!(opened, vec![(1, 1)]);
        assert_eq!(revealed.iter().filter(|&&open| open).count(), 1);
    }

    #[test]
    fn mine_origin_opens_only_itself() {
        let board = Board::from_mines(3, 3, &[(1, 1)]);
        let (mut revealed, flags) = masks(&board);

        let opened = reveal(&board, &mut revealed, &flags, (1, 1));

        assert_eq!(opened, vec![(1, 1)]);
    }

    #[test]
    fn flood_stops_at_number_border() {
        // column 3 is a wall of mines splitting the board in two
        let mines = (0..5).map(|row| (row, 3)).collect::<Vec<_>>();
        let board = Board::from_mines(7, 5, &mines);
        let (mut revealed, flags) = masks(&board);

        let opened = reveal(&board, &mut revealed, &flags, (2, 0))
            .into_iter()
            .collect::<HashSet<_>>();

        let expected = board
            .coords()
            .filter(|&(_, col)| col < 3)
            .collect::<HashSet<_>>();
        assert_eq!(opened, expected);
        for row in 0..5 {
            assert_eq!(board[(row, 2)], Square::Nearby(if row == 0 || row == 4 { 2 } else { 3 }));
            assert!(!revealed[(row, 4)]);
            assert!(!revealed[(row, 3)]);
        }
    }

    #[test]
    fn flags_block_the_flood() {
        let board = Board::from_mines(3, 1, &[]);
        let (mut revealed, mut flags) = masks(&board);
        flags[(0, 1)] = true;

        let opened = reveal(&board, &mut revealed, &flags, (0, 0));

        assert_eq!(opened, vec![(0, 0)]);
        assert!(!revealed[(0, 1)]);
        assert!(!revealed[(0, 2)]);

        assert!(reveal(&board, &mut revealed, &flags, (0, 1)).is_empty());
    }

    #[test]
    fn already_open_is_a_no_op() {
        let board = Board::from_mines(4, 4, &[(3, 3)]);
        let (mut revealed, flags) = masks(&board);

        assert!(!reveal(&board, &mut revealed, &flags, (0, 0)).is_empty());
        let before = revealed.clone();
        assert!(reveal(&board, &mut revealed, &flags, (0, 0)).is_empty());
        assert_eq!(revealed, before);
    }

    #[test]
    fn opened_squares_are_unique() {
        let board = Board::from_mines(30, 16, &[(8, 15)]);
        let (mut revealed, flags) = masks(&board);

        let opened = reveal(&board, &mut revealed, &flags, (0, 0));
        let unique = opened.iter().copied().collect::<HashSet<_>>();

        assert_eq!(opened.len(), unique.len());
        assert_eq!(opened.len(), 30 * 16 - 1);
    }
}
