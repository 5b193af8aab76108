//! Best prize-collecting path across a square board
//!
//! A walker starts in the top-left cell, moves only right or down, and
//! finishes in the bottom-right cell, collecting the prize of every visited
//! cell. Boards must be square; callers validate the shape first. The path
//! sum is `None` when it leaves the `i32` range.

/// Reshape a row-major list of `n * n` prizes into an `n x n` board
///
/// Returns `None` when the length is not a perfect square.
pub fn board_from_flat(prizes: &[i32]) -> Option<Vec<Vec<i32>>> {
    let n = integer_sqrt(prizes.len())?;
    Some(prizes.chunks(n.max(1)).take(n).map(<[i32]>::to_vec).collect())
}

fn integer_sqrt(len: usize) -> Option<usize> {
    let mut n = 0usize;
    while n * n < len {
        n += 1;
    }
    (n * n == len).then_some(n)
}

/// Bottom-up fill from the bottom-right corner
pub fn max_prize_path(board: &[Vec<i32>]) -> Option<i32> {
    let n = board.len();
    if n == 0 {
        return Some(0);
    }
    debug_assert!(board.iter().all(|row| row.len() == n), "board must be square");

    let mut best = vec![vec![0; n]; n];
    for i in (0..n).rev() {
        for j in (0..n).rev() {
            let tail = match (i + 1 < n, j + 1 < n) {
                (true, true) => best[i + 1][j].max(best[i][j + 1]),
                (true, false) => best[i + 1][j],
                (false, true) => best[i][j + 1],
                (false, false) => 0,
            };
            best[i][j] = board[i][j].checked_add(tail)?;
        }
    }

    Some(best[0][0])
}

/// Memoised recursion from the top-left corner
pub fn max_prize_path_top_down(board: &[Vec<i32>]) -> Option<i32> {
    let n = board.len();
    if n == 0 {
        return Some(0);
    }
    debug_assert!(board.iter().all(|row| row.len() == n), "board must be square");

    let mut memo = vec![vec![None; n]; n];
    best_from(board, &mut memo, 0, 0)
}

fn best_from(board: &[Vec<i32>], memo: &mut [Vec<Option<i32>>], row: usize, col: usize) -> Option<i32> {
    if let Some(value) = memo[row][col] {
        return Some(value);
    }

    let n = board.len();
    let tail = match (row + 1 < n, col + 1 < n) {
        (true, true) => best_from(board, memo, row + 1, col)?.max(best_from(board, memo, row, col + 1)?),
        (true, false) => best_from(board, memo, row + 1, col)?,
        (false, true) => best_from(board, memo, row, col + 1)?,
        (false, false) => 0,
    };

    let value = board[row][col].checked_add(tail)?;
    memo[row][col] = Some(value);
    Some(value)
}
