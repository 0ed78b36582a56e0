//! Move legality - breadth-first reachability over free cells
//!
//! A ball may travel from `from` to `to` when a chain of 4-adjacent free cells
//! links a neighbor of `from` to `to`. Every other ball is a wall. The source
//! cell itself is never revisited, so its own ball does not block the search.

use std::collections::VecDeque;

use crate::field::Field;
use crate::types::{Cell, Direction};

/// Check whether a ball at `from` can be moved to `to`.
///
/// - `from` must be on the field and hold a ball.
/// - `from == to` is always legal.
/// - otherwise `to` must be on the field and free, and reachable through free cells.
pub fn can_reach(field: &Field, from: Cell, to: Cell) -> bool {
    if !field.is_occupied(from) || !field.contains(to) {
        return false;
    }
    if from == to {
        return true;
    }
    if field.is_occupied(to) {
        return false;
    }

    // Balls (including the source) are pre-marked so the search never enters them.
    let mut visited: Vec<bool> = field.cells().map(|c| field.is_occupied(c)).collect();
    let mut queue: VecDeque<(Cell, Direction)> = VecDeque::with_capacity(4 * field.len());
    queue.extend(Direction::ALL.iter().map(|&d| (from, d)));

    while let Some((cell, direction)) = queue.pop_front() {
        // Border: no edge in this direction.
        let Some(next) = field.neighbor(cell, direction) else {
            continue;
        };
        if next == to {
            return true;
        }
        let Some(i) = field.index(next) else {
            continue;
        };
        if visited[i] {
            continue;
        }
        visited[i] = true;
        for d in Direction::ALL {
            if let Some(n) = field.neighbor(next, d) {
                if field.index(n).is_some_and(|j| !visited[j]) {
                    queue.push_back((next, d));
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Ball, Color};

    fn field_with(size: u8, balls: &[(u8, u8)]) -> Field {
        let mut field = Field::new(size).unwrap();
        for &(x, y) in balls {
            field.set_ball(Cell::new(x, y), Some(Ball::new(Color::Red)));
        }
        field
    }

    #[test]
    fn test_open_board_is_fully_reachable() {
        let field = field_with(9, &[(4, 4)]);
        for cell in field.cells() {
            assert!(can_reach(&field, Cell::new(4, 4), cell), "{:?}", cell);
        }
    }

    #[test]
    fn test_same_cell_is_legal() {
        let field = field_with(5, &[(2, 2)]);
        assert!(can_reach(&field, Cell::new(2, 2), Cell::new(2, 2)));
    }

    #[test]
    fn test_empty_source_is_illegal() {
        let field = field_with(5, &[]);
        assert!(!can_reach(&field, Cell::new(1, 1), Cell::new(2, 2)));
        assert!(!can_reach(&field, Cell::new(1, 1), Cell::new(1, 1)));
    }

    #[test]
    fn test_occupied_target_is_illegal() {
        let field = field_with(5, &[(0, 0), (1, 0)]);
        assert!(!can_reach(&field, Cell::new(0, 0), Cell::new(1, 0)));
    }

    #[test]
    fn test_off_field_target_is_illegal() {
        let field = field_with(5, &[(0, 0)]);
        assert!(!can_reach(&field, Cell::new(0, 0), Cell::new(5, 0)));
        assert!(!can_reach(&field, Cell::new(9, 9), Cell::new(0, 1)));
    }

    #[test]
    fn test_wall_blocks_path() {
        // Column x=2 is a full wall on a 5x5 board.
        let mut balls: Vec<(u8, u8)> = (0..5).map(|y| (2, y)).collect();
        balls.push((0, 0));
        let field = field_with(5, &balls);

        assert!(can_reach(&field, Cell::new(0, 0), Cell::new(1, 4)));
        assert!(!can_reach(&field, Cell::new(0, 0), Cell::new(3, 0)));
        assert!(!can_reach(&field, Cell::new(0, 0), Cell::new(4, 4)));
    }

    #[test]
    fn test_diagonal_gap_is_not_a_path() {
        // (0,0) is boxed in by (1,0) and (0,1); (1,1) is free but only diagonal.
        let field = field_with(4, &[(0, 0), (1, 0), (0, 1)]);
        assert!(!can_reach(&field, Cell::new(0, 0), Cell::new(1, 1)));
    }

    #[test]
    fn test_source_ball_does_not_block_itself() {
        // Corridor along y=1 with the source in the middle of it.
        let mut balls: Vec<(u8, u8)> = (0..5).map(|x| (x, 0)).collect();
        balls.extend((0..5).map(|x| (x, 2)));
        balls.push((2, 1));
        let field = field_with(5, &balls);

        assert!(can_reach(&field, Cell::new(2, 1), Cell::new(0, 1)));
        assert!(can_reach(&field, Cell::new(2, 1), Cell::new(4, 1)));
        assert!(!can_reach(&field, Cell::new(2, 1), Cell::new(4, 4)));
    }

    #[test]
    fn test_path_can_wind_around_walls() {
        // S-shaped corridor on a 5x5 board.
        let balls = [
            (0, 1), (1, 1), (2, 1), (3, 1),
            (1, 3), (2, 3), (3, 3), (4, 3),
            (0, 0),
        ];
        let field = field_with(5, &balls);
        assert!(can_reach(&field, Cell::new(0, 0), Cell::new(0, 4)));
    }
}
