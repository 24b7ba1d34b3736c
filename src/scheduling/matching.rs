//! Optimal matching over a rectangular cost matrix.
//!
//! Implements the Hungarian method in its shortest-augmenting-path form with
//! integer dual potentials. Every row of the smaller side is matched, so a
//! matrix with `R` rows and `C` columns yields exactly `min(R, C)` pairs.
//!
//! Forbidden cells take part in the optimisation with a weight larger than
//! the cost of any complete matching built from allowed cells. The solver
//! therefore maximises the number of allowed pairs first and minimises their
//! total cost second. Pairs on forbidden cells are still returned; callers
//! decide what to do with them.

use super::{CostCell, CostMatrix};

// Large enough to never be reached by potentials, small enough not to overflow.
const INF: i64 = i64::MAX / 4;

/// A (row, column) pair chosen by the solver, with its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedPair {
    /// Row index in the cost matrix.
    pub row: usize,
    /// Column index in the cost matrix.
    pub col: usize,
    /// The matched cell.
    pub cell: CostCell,
}

/// Computes a minimum-cost assignment.
///
/// Pairs are returned in ascending row order.
///
/// # Example
///
/// ```
/// use shift_engine::scheduling::{CostCell, CostMatrix, solve};
///
/// let costs = [[4, 1, 3], [2, 0, 5], [3, 2, 2]];
/// let matrix = CostMatrix::from_fn(3, 3, |r, c| CostCell::Allowed(costs[r][c]));
///
/// let pairs = solve(&matrix);
/// let cols: Vec<usize> = pairs.iter().map(|p| p.col).collect();
/// assert_eq!(cols, vec![1, 0, 2]);
/// ```
pub fn solve(matrix: &CostMatrix) -> Vec<MatchedPair> {
    let (rows, cols) = (matrix.rows(), matrix.cols());
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let forbidden = forbidden_weight(matrix);
    let weight = |row: usize, col: usize| match matrix.get(row, col) {
        CostCell::Allowed(cost) => i64::from(cost),
        CostCell::Forbidden => forbidden,
    };

    let mut pairs: Vec<(usize, usize)> = if rows <= cols {
        shortest_augmenting_path(rows, cols, &weight)
            .into_iter()
            .enumerate()
            .collect()
    } else {
        shortest_augmenting_path(cols, rows, |col, row| weight(row, col))
            .into_iter()
            .enumerate()
            .map(|(col, row)| (row, col))
            .collect()
    };
    pairs.sort_unstable();

    pairs
        .into_iter()
        .map(|(row, col)| MatchedPair {
            row,
            col,
            cell: matrix.get(row, col),
        })
        .collect()
}

/// Sums the allowed costs of a set of pairs.
pub fn allowed_cost(pairs: &[MatchedPair]) -> u64 {
    pairs
        .iter()
        .filter_map(|pair| pair.cell.cost())
        .map(u64::from)
        .sum()
}

/// A weight strictly greater than any sum of `min(R, C)` allowed costs.
fn forbidden_weight(matrix: &CostMatrix) -> i64 {
    let pairs = matrix.rows().min(matrix.cols()) as i64;
    i64::from(matrix.max_allowed_cost()) * pairs + 1
}

/// Solves an `n × m` assignment with `n <= m`.
///
/// Returns, for each of the `n` rows, the column it is matched to.
fn shortest_augmenting_path<F>(n: usize, m: usize, weight: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> i64,
{
    debug_assert!(n <= m);

    // Index 0 is a virtual row/column; real ones are 1-based.
    let mut row_potential = vec![0i64; n + 1];
    let mut col_potential = vec![0i64; m + 1];
    let mut col_owner = vec![0usize; m + 1];
    let mut came_from = vec![0usize; m + 1];

    for row in 1..=n {
        col_owner[0] = row;
        let mut current_col = 0;
        let mut min_slack = vec![INF; m + 1];
        let mut visited = vec![false; m + 1];

        // Grow the alternating tree until it reaches a free column.
        loop {
            visited[current_col] = true;
            let current_row = col_owner[current_col];
            let mut delta = INF;
            let mut next_col = 0;

            for col in 1..=m {
                if visited[col] {
                    continue;
                }
                let slack = weight(current_row - 1, col - 1)
                    - row_potential[current_row]
                    - col_potential[col];
                if slack < min_slack[col] {
                    min_slack[col] = slack;
                    came_from[col] = current_col;
                }
                if min_slack[col] < delta {
                    delta = min_slack[col];
                    next_col = col;
                }
            }

            for col in 0..=m {
                if visited[col] {
                    row_potential[col_owner[col]] += delta;
                    col_potential[col] -= delta;
                } else {
                    min_slack[col] -= delta;
                }
            }

            current_col = next_col;
            if col_owner[current_col] == 0 {
                break;
            }
        }

        // Flip the augmenting path.
        while current_col != 0 {
            let previous = came_from[current_col];
            col_owner[current_col] = col_owner[previous];
            current_col = previous;
        }
    }

    let mut assignment = vec![0usize; n];
    for col in 1..=m {
        if col_owner[col] != 0 {
            assignment[col_owner[col] - 1] = col - 1;
        }
    }
    assignment
}
