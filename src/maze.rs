use core::fmt;
use std::str::FromStr;

use crate::error::{Endpoint, SearchError};
use crate::{PathingGrid, Position};

/// A grid together with its start and goal, the form in which mazes are usually written down.
///
/// The text form uses one line per row: `S` start, `G` goal, `#` or `1` a wall, `.` or `0` a
/// free cell. Spaces and tabs between cells and blank lines are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub grid: PathingGrid,
    pub start: Position,
    pub goal: Position,
}

impl Maze {
    /// Wraps numeric rows (1 blocked, anything else free) with explicit endpoints, checking
    /// that both are walkable.
    pub fn from_cells<R: AsRef<[u8]>>(
        rows: &[R],
        start: Position,
        goal: Position,
    ) -> Result<Maze, SearchError> {
        let grid = PathingGrid::from_rows(rows)?;
        grid.check_endpoints(start, goal)?;
        Ok(Maze { grid, start, goal })
    }

    pub fn parse(text: &str) -> Result<Maze, SearchError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut start = None;
        let mut goal = None;
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let row = rows.len() as i32;
            let mut cells = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let pos = Position::new(row, cells.len() as i32);
                let cell = match ch {
                    '.' | '0' => 0,
                    '#' | '1' => 1,
                    'S' => {
                        mark(&mut start, 'S', pos)?;
                        0
                    }
                    'G' => {
                        mark(&mut goal, 'G', pos)?;
                        0
                    }
                    _ => return Err(SearchError::UnknownMarker { ch, pos }),
                };
                cells.push(cell);
            }
            rows.push(cells);
        }
        let grid = PathingGrid::from_rows(&rows)?;
        Ok(Maze {
            grid,
            start: start.ok_or(SearchError::MissingMarker('S'))?,
            goal: goal.ok_or(SearchError::MissingMarker('G'))?,
        })
    }

    /// Renders the maze with `path` drawn as `*` over the free cells it crosses.
    pub fn render_path(&self, path: &[Position]) -> String {
        let mut out = String::new();
        for row in 0..self.grid.rows() as i32 {
            for col in 0..self.grid.cols() as i32 {
                let p = Position::new(row, col);
                out.push(if p == self.start {
                    'S'
                } else if p == self.goal {
                    'G'
                } else if self.grid.is_blocked(p) {
                    '#'
                } else if path.contains(&p) {
                    '*'
                } else {
                    '.'
                });
            }
            out.push('\n');
        }
        out
    }

    pub fn role_of(&self, pos: Position) -> Option<Endpoint> {
        if pos == self.start {
            Some(Endpoint::Start)
        } else if pos == self.goal {
            Some(Endpoint::Goal)
        } else {
            None
        }
    }
}

fn mark(slot: &mut Option<Position>, marker: char, pos: Position) -> Result<(), SearchError> {
    match *slot {
        Some(first) => Err(SearchError::DuplicateMarker {
            marker,
            first,
            second: pos,
        }),
        None => {
            *slot = Some(pos);
            Ok(())
        }
    }
}

impl FromStr for Maze {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::parse(s)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "
        S . . # .
        . # . # .
        . . . . .
        # # . # G
    ";

    #[test]
    fn parse_markers() {
        let maze: Maze = SMALL.parse().unwrap();
        assert_eq!(maze.start, Position::new(0, 0));
        assert_eq!(maze.goal, Position::new(3, 4));
        assert_eq!(maze.grid.rows(), 4);
        assert_eq!(maze.grid.cols(), 5);
        assert!(maze.grid.is_blocked(Position::new(0, 3)));
        assert!(maze.grid.can_move_to(maze.goal));
        assert_eq!(maze.role_of(Position::new(3, 4)), Some(Endpoint::Goal));
    }

    #[test]
    fn numeric_cells_and_round_trip() {
        let maze = Maze::parse("S01\n00G").unwrap();
        assert!(maze.grid.is_blocked(Position::new(0, 2)));
        assert_eq!(maze.to_string(), "S.#\n..G\n");
    }

    #[test]
    fn marker_errors() {
        assert_eq!(Maze::parse("S..\n..."), Err(SearchError::MissingMarker('G')));
        assert_eq!(
            Maze::parse("S.S\n..G"),
            Err(SearchError::DuplicateMarker {
                marker: 'S',
                first: Position::new(0, 0),
                second: Position::new(0, 2)
            })
        );
        assert_eq!(
            Maze::parse("S.x\n..G"),
            Err(SearchError::UnknownMarker {
                ch: 'x',
                pos: Position::new(0, 2)
            })
        );
        assert!(matches!(
            Maze::parse("S..\n.G"),
            Err(SearchError::RaggedRows { row: 1, .. })
        ));
        assert_eq!(Maze::parse("\n\n"), Err(SearchError::EmptyGrid));
    }

    #[test]
    fn from_cells_checks_endpoints() {
        let rows = [[0u8, 1], [0, 0]];
        assert!(Maze::from_cells(&rows, Position::new(0, 0), Position::new(1, 1)).is_ok());
        assert!(matches!(
            Maze::from_cells(&rows, Position::new(0, 1), Position::new(1, 1)),
            Err(SearchError::Blocked {
                role: Endpoint::Start,
                ..
            })
        ));
    }

    #[test]
    fn renders_path() {
        let maze = Maze::parse("S..\n.#.\n..G").unwrap();
        let path = [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 2),
            Position::new(2, 2),
        ];
        assert_eq!(maze.render_path(&path), "S**\n.#*\n..G\n");
    }
}
