//! Exhaustive K-in-a-row detection over the 3-D lattice.

use super::{Board, Cell, Player};

/// The 13 canonical line directions as (height, width, depth) steps: every
/// non-zero vector in {-1, 0, 1}^3 with its antiparallel twin removed.
pub const DIRECTIONS: [(isize, isize, isize); 13] = [
    // axes
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
    // face diagonals
    (1, 1, 0),
    (1, -1, 0),
    (1, 0, 1),
    (1, 0, -1),
    (0, 1, 1),
    (0, 1, -1),
    // space diagonals
    (1, 1, 1),
    (1, 1, -1),
    (1, -1, 1),
    (1, -1, -1),
];

/// Return the owner of the first line of `win_length` identical pieces found,
/// scanning cells in (height, width, depth) order and directions in
/// [`DIRECTIONS`] order. `None` when no line exists, including whenever
/// `win_length` exceeds the board size.
pub fn find_winner(board: &Board, win_length: usize) -> Option<Player> {
    line_owners(board, win_length).next()
}

/// Whether `player` owns at least one line of `win_length` pieces.
pub fn has_line(board: &Board, win_length: usize, player: Player) -> bool {
    line_owners(board, win_length).any(|owner| owner == player)
}

/// Owner of every line of `win_length` pieces, one item per (start cell,
/// direction) hit, in scan order. Empty when `win_length` is 0 or exceeds the
/// board size.
fn line_owners(board: &Board, win_length: usize) -> impl Iterator<Item = Player> + '_ {
    let g = board.grid_size();
    let g = if win_length == 0 || win_length > g { 0 } else { g };

    (0..g)
        .flat_map(move |h| (0..g).flat_map(move |w| (0..g).map(move |d| (h, w, d))))
        .filter_map(move |(h, w, d)| {
            let cell = board.get(h, w, d);
            cell.player().map(|player| (player, cell, (h, w, d)))
        })
        .flat_map(move |(player, cell, start)| {
            DIRECTIONS
                .into_iter()
                .filter(move |&dir| line_from(board, start, dir, cell, win_length))
                .map(move |_| player)
        })
}

/// Check the `len - 1` cells after `start` along `dir` are in bounds and equal `cell`.
fn line_from(
    board: &Board,
    start: (usize, usize, usize),
    dir: (isize, isize, isize),
    cell: Cell,
    len: usize,
) -> bool {
    let g = board.grid_size() as isize;
    let (h0, w0, d0) = (start.0 as isize, start.1 as isize, start.2 as isize);

    (1..len as isize).all(|step| {
        let h = h0 + dir.0 * step;
        let w = w0 + dir.1 * step;
        let d = d0 + dir.2 * step;
        let in_bounds = (0..g).contains(&h) && (0..g).contains(&w) && (0..g).contains(&d);
        in_bounds && board.get(h as usize, w as usize, d as usize) == cell
    })
}
