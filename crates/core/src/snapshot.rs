//! Snapshot module - compact binary save format
//!
//! Every value is a single byte:
//!
//! ```text
//! size
//! occupied count
//!   x, y, color index        (per occupied cell, in fill order)
//! next balls count
//!   color index              (per previewed ball)
//! score
//! moves
//! ```
//!
//! Values above 255 do not fit the format; encoding reports them as
//! [`SnapshotError::Overflow`] instead of truncating. Decoding validates every
//! byte and rejects trailing data.

use arrayvec::ArrayVec;
use indexmap::IndexSet;
use tracing::info;

use crate::error::SnapshotError;
use crate::field::Field;
use crate::game::Game;
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{Ball, Cell, Color, NEXT_BALLS_COUNT};

fn byte(field: &'static str, value: usize) -> Result<u8, SnapshotError> {
    u8::try_from(value).map_err(|_| SnapshotError::Overflow { field, value })
}

/// Sequential reader that reports the offset of a missing byte.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn u8(&mut self) -> Result<u8, SnapshotError> {
        let b = *self
            .bytes
            .get(self.pos)
            .ok_or(SnapshotError::Truncated { offset: self.pos })?;
        self.pos += 1;
        Ok(b)
    }

    fn color(&mut self) -> Result<Color, SnapshotError> {
        let index = self.u8()?;
        Color::from_index(index).ok_or(SnapshotError::UnknownColor(index))
    }

    fn finish(self) -> Result<(), SnapshotError> {
        match self.bytes.len() - self.pos {
            0 => Ok(()),
            extra => Err(SnapshotError::TrailingBytes { extra }),
        }
    }
}

impl<R: RandomSource> Game<R> {
    /// Serialize the game into the one-byte-per-value format.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        // The count byte is taken from the entries actually written, so the
        // output always decodes even if a listed cell has lost its ball.
        let entries: Vec<[u8; 3]> = self
            .occupied()
            .filter_map(|cell| {
                let ball = self.field().ball(cell);
                debug_assert!(ball.is_some(), "occupied cell {:?} holds no ball", cell);
                ball.map(|b| [cell.x, cell.y, b.color.index()])
            })
            .collect();
        let next = self.next_balls();
        let mut out = Vec::with_capacity(2 + 3 * entries.len() + 1 + next.len() + 2);

        out.push(self.field().size());
        out.push(byte("occupied count", entries.len())?);
        out.extend(entries.iter().flatten());
        out.push(byte("next balls count", next.len())?);
        out.extend(next.iter().map(|b| b.color.index()));
        out.push(byte("score", self.score() as usize)?);
        out.push(byte("moves", self.moves_num() as usize)?);

        Ok(out)
    }

    /// Rebuild a game from snapshot bytes, drawing future balls from `rng`.
    ///
    /// The game is not restarted: the board, preview, score and move count are
    /// exactly those recorded.
    pub fn restore_with_rng(bytes: &[u8], rng: R) -> Result<Self, SnapshotError> {
        let mut reader = Reader::new(bytes);

        let size = reader.u8()?;
        let mut field = Field::new(size).map_err(|_| SnapshotError::InvalidSize(size))?;

        let count = reader.u8()? as usize;
        if count > field.len() {
            return Err(SnapshotError::TooManyBalls {
                count,
                capacity: field.len(),
            });
        }
        let mut occupied = IndexSet::with_capacity(count);
        for _ in 0..count {
            let (x, y) = (reader.u8()?, reader.u8()?);
            let color = reader.color()?;
            let cell = Cell::new(x, y);
            if !field.contains(cell) {
                return Err(SnapshotError::CellOutOfRange { x, y, size });
            }
            if !occupied.insert(cell) {
                return Err(SnapshotError::DuplicateCell { x, y });
            }
            field.set_ball(cell, Some(Ball::new(color)));
        }

        let next_count = reader.u8()?;
        if next_count as usize > NEXT_BALLS_COUNT {
            return Err(SnapshotError::TooManyNextBalls(next_count));
        }
        let mut next_balls = ArrayVec::new();
        for _ in 0..next_count {
            next_balls.push(Ball::new(reader.color()?));
        }

        let score = reader.u8()? as u32;
        let moves_num = reader.u8()? as u32;
        reader.finish()?;

        info!(size, balls = count, score, moves = moves_num, "game restored");
        Ok(Game::from_parts(
            field, occupied, next_balls, score, moves_num, rng,
        ))
    }
}

impl Game<SimpleRng> {
    /// Rebuild a game from snapshot bytes with a clock-seeded generator.
    pub fn restore(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Self::restore_with_rng(bytes, SimpleRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5x5 board, balls at (0,0) red and (4,2) gold, full preview, score 7, 2 moves.
    fn sample() -> Vec<u8> {
        vec![5, 2, 0, 0, 0, 4, 2, 3, 3, 1, 2, 6, 7, 2]
    }

    #[test]
    fn test_decode_sample() {
        let game = Game::restore_with_rng(&sample(), SimpleRng::new(1)).unwrap();
        assert_eq!(game.field().size(), 5);
        assert_eq!(
            game.occupied().collect::<Vec<_>>(),
            vec![Cell::new(0, 0), Cell::new(4, 2)]
        );
        assert_eq!(game.field().ball(Cell::new(0, 0)), Some(Ball::new(Color::Red)));
        assert_eq!(game.field().ball(Cell::new(4, 2)), Some(Ball::new(Color::Gold)));
        assert_eq!(
            game.next_balls(),
            &[
                Ball::new(Color::Blue),
                Ball::new(Color::Green),
                Ball::new(Color::Burgundy)
            ]
        );
        assert_eq!(game.score(), 7);
        assert_eq!(game.moves_num(), 2);
        assert_eq!(game.free_count(), 23);
    }

    #[test]
    fn test_encode_matches_decoded_bytes() {
        let game = Game::restore_with_rng(&sample(), SimpleRng::new(1)).unwrap();
        assert_eq!(game.snapshot().unwrap(), sample());
    }

    #[test]
    fn test_encode_fresh_game() {
        let game = Game::new(9, Some(1)).unwrap();
        assert_eq!(game.snapshot().unwrap(), vec![9, 0, 0, 0, 0]);
    }

    #[test]
    fn test_truncated() {
        let bytes = sample();
        for len in 0..bytes.len() {
            let err = Game::restore(&bytes[..len]).unwrap_err();
            assert_eq!(err, SnapshotError::Truncated { offset: len }, "len {}", len);
        }
    }

    #[test]
    fn test_trailing_bytes() {
        let mut bytes = sample();
        bytes.extend_from_slice(&[0, 0]);
        assert_eq!(
            Game::restore(&bytes).unwrap_err(),
            SnapshotError::TrailingBytes { extra: 2 }
        );
    }

    #[test]
    fn test_invalid_values() {
        let mut bytes = sample();
        bytes[0] = 0;
        assert_eq!(
            Game::restore(&bytes).unwrap_err(),
            SnapshotError::InvalidSize(0)
        );

        let mut bytes = sample();
        bytes[5] = 5;
        assert_eq!(
            Game::restore(&bytes).unwrap_err(),
            SnapshotError::CellOutOfRange { x: 5, y: 2, size: 5 }
        );

        let mut bytes = sample();
        bytes[4] = 7;
        assert_eq!(
            Game::restore(&bytes).unwrap_err(),
            SnapshotError::UnknownColor(7)
        );

        let mut bytes = sample();
        bytes[5] = 0;
        bytes[6] = 0;
        assert_eq!(
            Game::restore(&bytes).unwrap_err(),
            SnapshotError::DuplicateCell { x: 0, y: 0 }
        );

        let mut bytes = sample();
        bytes[8] = 4;
        assert_eq!(
            Game::restore(&bytes).unwrap_err(),
            SnapshotError::TooManyNextBalls(4)
        );

        let bytes = vec![2, 5];
        assert_eq!(
            Game::restore(&bytes).unwrap_err(),
            SnapshotError::TooManyBalls {
                count: 5,
                capacity: 4
            }
        );
    }

    #[test]
    fn test_overflowing_score_is_reported() {
        let field = Field::new(5).unwrap();
        let game = Game::from_parts(
            field,
            IndexSet::new(),
            ArrayVec::new(),
            256,
            3,
            SimpleRng::new(1),
        );
        assert_eq!(
            game.snapshot().unwrap_err(),
            SnapshotError::Overflow {
                field: "score",
                value: 256
            }
        );
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "holds no ball"))]
    fn test_count_matches_written_entries() {
        // (1, 1) is listed as occupied but the field has no ball there.
        let mut field = Field::new(5).unwrap();
        field.set_ball(Cell::new(0, 0), Some(Ball::new(Color::Aqua)));
        let occupied: IndexSet<Cell> = [Cell::new(0, 0), Cell::new(1, 1)].into_iter().collect();
        let game = Game::from_parts(field, occupied, ArrayVec::new(), 0, 0, SimpleRng::new(1));

        let bytes = game.snapshot().unwrap();
        assert_eq!(bytes, vec![5, 1, 0, 0, 5, 0, 0, 0]);
        let restored = Game::restore(&bytes).unwrap();
        assert_eq!(restored.occupied_count(), 1);
    }

    #[test]
    fn test_large_board_overflows_occupied_count() {
        // 256 balls cannot be counted in one byte.
        let mut field = Field::new(16).unwrap();
        let cells: IndexSet<Cell> = field.cells().collect();
        for &cell in &cells {
            let color = Color::ALL[(cell.x as usize + 2 * cell.y as usize) % 7];
            field.set_ball(cell, Some(Ball::new(color)));
        }
        let game = Game::from_parts(field, cells, ArrayVec::new(), 0, 0, SimpleRng::new(1));
        assert_eq!(game.free_count(), 0);
        assert_eq!(
            game.snapshot().unwrap_err(),
            SnapshotError::Overflow {
                field: "occupied count",
                value: 256
            }
        );
    }
}
