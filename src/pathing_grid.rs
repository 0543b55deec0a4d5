use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::Rect;
use log::warn;
use smallvec::SmallVec;

use crate::error::{Endpoint, SearchError};
use crate::{Position, N_SMALLVEC_SIZE};

/// Cardinal offsets in (row, col) terms, in the order every search enumerates them.
pub const CARDINAL_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
/// Diagonal offsets, enumerated after the cardinal ones when diagonal movement is allowed.
pub const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Marker value for a blocked cell in numeric row input. Every other value is walkable.
pub const BLOCKED_CELL: u8 = 1;

/// Largest number of rows or columns a grid may have, so that every cell is addressable with
/// `i32` coordinates.
pub const MAX_SIDE: usize = i32::MAX as usize;

/// [PathingGrid] is a rectangular occupancy grid over a [BoolGrid], where a cell is either
/// blocked ([true]) or free ([false]). The backing grid is indexed (x, y), i.e. (col, row).
/// Searches only ever read it, so one grid may be shared between concurrent searches.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    grid: BoolGrid,
    rows: usize,
    cols: usize,
}

impl PathingGrid {
    /// Creates a `rows` x `cols` grid with every cell set to `blocked`. Fails if either side
    /// is zero or the shape does not fit in `i32` coordinates.
    pub fn new(rows: usize, cols: usize, blocked: bool) -> Result<PathingGrid, SearchError> {
        if rows == 0 || cols == 0 {
            return Err(SearchError::EmptyGrid);
        }
        if rows > MAX_SIDE || cols > MAX_SIDE || rows.checked_mul(cols).is_none() {
            warn!("Rejecting {rows}x{cols} grid: too large");
            return Err(SearchError::GridTooLarge { rows, cols });
        }
        Ok(PathingGrid {
            grid: BoolGrid::new(cols, rows, blocked),
            rows,
            cols,
        })
    }

    /// Builds a grid from numeric rows where [BLOCKED_CELL] marks a wall and anything else
    /// is walkable. Fails on an empty or non-rectangular input.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<PathingGrid, SearchError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = PathingGrid::new(rows.len(), cols, false)?;
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != cols {
                return Err(SearchError::RaggedRows {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            for (col, &cell) in cells.iter().enumerate() {
                grid.grid.set(col as i32, row as i32, cell == BLOCKED_CELL);
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, pos: Position) -> bool {
        !self.can_move_to(pos)
    }

    /// Walkability predicate: in bounds and not blocked.
    pub fn can_move_to(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.grid.get_point(pos.into())
    }

    /// Sets a cell. Positions outside the grid are ignored.
    pub fn set(&mut self, pos: Position, blocked: bool) {
        if self.in_bounds(pos) {
            self.grid.set(pos.col, pos.row, blocked);
        }
    }

    /// Blocks or frees every cell of the inclusive rectangle spanned by two corners. The part
    /// outside the grid is ignored.
    pub fn set_rect(&mut self, corner_a: Position, corner_b: Position, blocked: bool) {
        let top = corner_a.row.min(corner_b.row).max(0);
        let bottom = corner_a.row.max(corner_b.row).min(self.rows as i32 - 1);
        let left = corner_a.col.min(corner_b.col).max(0);
        let right = corner_a.col.max(corner_b.col).min(self.cols as i32 - 1);
        if top > bottom || left > right {
            return;
        }
        // `ValueGrid::set_rect` covers `x1..=x2` / `y1..=y2`, so use the inclusive corners directly
        let rect = Rect {
            x1: left,
            x2: right,
            y1: top,
            y2: bottom,
        };
        self.grid.set_rect(rect, blocked);
    }

    pub fn free_cells(&self) -> impl Iterator<Item = Position> + '_ {
        // Both sides are at most MAX_SIDE, so the casts are lossless
        (0..self.rows as i32)
            .flat_map(move |row| (0..self.cols as i32).map(move |col| Position::new(row, col)))
            .filter(move |p| self.can_move_to(*p))
    }

    /// Walkable successors of `pos` in the fixed enumeration order of [CARDINAL_OFFSETS]
    /// followed, if `allow_diagonal`, by [DIAGONAL_OFFSETS].
    pub fn neighborhood_points(
        &self,
        pos: &Position,
        allow_diagonal: bool,
    ) -> SmallVec<[Position; N_SMALLVEC_SIZE]> {
        let diagonals: &[(i32, i32)] = if allow_diagonal { &DIAGONAL_OFFSETS } else { &[] };
        CARDINAL_OFFSETS
            .iter()
            .chain(diagonals)
            .map(|&(dr, dc)| pos.offset(dr, dc))
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    /// Rejects an endpoint that is outside the grid or on a wall.
    pub fn check_endpoint(&self, role: Endpoint, pos: Position) -> Result<(), SearchError> {
        if !self.in_bounds(pos) {
            warn!("Rejecting {role} {pos}: outside {}x{} grid", self.rows, self.cols);
            return Err(SearchError::OutOfBounds {
                role,
                pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.is_blocked(pos) {
            warn!("Rejecting {role} {pos}: cell is blocked");
            return Err(SearchError::Blocked { role, pos });
        }
        Ok(())
    }

    pub fn check_endpoints(&self, start: Position, goal: Position) -> Result<(), SearchError> {
        self.check_endpoint(Endpoint::Start, start)?;
        self.check_endpoint(Endpoint::Goal, goal)
    }
}

impl PartialEq for PathingGrid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && (0..self.rows as i32).all(|y| {
                (0..self.cols as i32).all(|x| self.grid.get(x, y) == other.grid.get(x, y))
            })
    }
}

impl Eq for PathingGrid {}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.rows as i32 {
            let values = (0..self.cols as i32)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
