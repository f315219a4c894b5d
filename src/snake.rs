use std::ops::Range;

use log::debug;
use rand::Rng;

use crate::{Coords, GridInt};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit step in storage space. Rows are printed in reverse, so +y is up on screen.
    pub fn vector(self) -> Coords {
        match self {
            Up => (0, 1),
            Down => (0, -1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

pub fn translate(pos: Coords, direction: Direction) -> Coords {
    let (dx, dy) = direction.vector();
    (pos.0 + dx, pos.1 + dy)
}

pub fn is_interior(pos: Coords, width: GridInt, height: GridInt) -> bool {
    pos.0 >= 1 && pos.0 <= width - 2 && pos.1 >= 1 && pos.1 <= height - 2
}

/// The neighbouring cell in `direction`, with each axis pinned to the interior.
pub fn advance(pos: Coords, direction: Direction, width: GridInt, height: GridInt) -> Coords {
    let (x, y) = translate(pos, direction);
    (clamp_axis(x, width), clamp_axis(y, height))
}

fn clamp_axis(value: GridInt, dimension: GridInt) -> GridInt {
    if value > dimension - 2 {
        dimension - 2
    } else if value <= 0 {
        1
    } else {
        value
    }
}

pub fn distance(a: Coords, b: Coords) -> f64 {
    (squared_distance(a, b) as f64).sqrt()
}

fn squared_distance(a: Coords, b: Coords) -> i32 {
    let dx = (a.0 - b.0) as i32;
    let dy = (a.1 - b.1) as i32;
    dx * dx + dy * dy
}

/// The cell of `body` farthest from `target`. Equal distances resolve to the
/// cell that comes first in row-major storage order.
pub fn farthest_from(target: Coords, body: &[Coords]) -> Option<Coords> {
    debug!(
        "Distances to {:?}: {:?}",
        target,
        body.iter().map(|pos| distance(target, *pos)).collect::<Vec<_>>()
    );

    body.iter().copied().max_by(|a, b| {
        squared_distance(target, *a)
            .cmp(&squared_distance(target, *b))
            .then_with(|| (b.1, b.0).cmp(&(a.1, a.0)))
    })
}

/// An ordered snake. Body segments run from the tail to the cell behind the head,
/// and no cell appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Coords>,
    head: Coords,
}

impl Snake {
    /// Lays `len` body segments out from `start`, each one `advance` past the
    /// previous, and puts the head one step past the last of them.
    pub fn lay_out(start: Coords, len: usize, direction: Direction, width: GridInt, height: GridInt) -> Self {
        let mut body = Vec::with_capacity(len);
        let mut pos = start;

        for _ in 0..len {
            // Clamping against a wall can land on the same cell twice, the later segment wins
            body.retain(|seg| *seg != pos);
            body.push(pos);
            pos = advance(pos, direction, width, height);
        }

        body.retain(|seg| *seg != pos);
        Snake { body, head: pos }
    }

    /// Lays the snake out from a random start at least `len` cells away from every
    /// wall, with room for the head ahead of it on the axis it travels along.
    pub fn seed<R: Rng>(rng: &mut R, len: usize, direction: Direction, width: GridInt, height: GridInt) -> Self {
        let offset = len.min(GridInt::MAX as usize) as GridInt;
        let (dx, dy) = direction.vector();
        let start = (
            rng.gen_range(sample_range(offset, width, dx)),
            rng.gen_range(sample_range(offset, height, dy)),
        );

        Snake::lay_out(start, len, direction, width, height)
    }

    pub fn head(&self) -> Coords {
        self.head
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    /// Moves the head to `next`, clearing `vacated` from the body. With no
    /// vacated cell the old head is dropped instead of becoming body.
    pub fn move_to(&mut self, next: Coords, vacated: Option<Coords>) {
        if let Some(cell) = vacated {
            self.body.retain(|seg| *seg != cell);
            self.body.push(self.head);
        }

        self.body.retain(|seg| *seg != next);
        self.head = next;
    }
}

#[cfg(test)]
impl Snake {
    pub fn from_parts(body: Vec<Coords>, head: Coords) -> Self {
        Snake { body, head }
    }
}

/// Start positions `offset` cells clear of both walls, pulled in by one more on
/// the side `step` heads towards. Grids too small for that fall back to the plain range.
fn sample_range(offset: GridInt, dimension: GridInt, step: GridInt) -> Range<GridInt> {
    let offset = offset.min((dimension - 1) / 2).max(1);
    let (low, high) = match step {
        1 => (offset, dimension - offset - 1),
        -1 => (offset + 1, dimension - offset),
        _ => (offset, dimension - offset),
    };

    if low < high {
        low..high
    } else {
        offset..dimension - offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const ALL: [Direction; 4] = [Up, Down, Left, Right];

    #[test]
    fn vectors_are_unit_steps() {
        assert_eq!(Up.vector(), (0, 1));
        assert_eq!(Down.vector(), (0, -1));
        assert_eq!(Left.vector(), (-1, 0));
        assert_eq!(Right.vector(), (1, 0));
    }

    #[test]
    fn advance_never_leaves_the_interior() {
        for x in 1..19 {
            for y in 1..14 {
                for dir in ALL.iter() {
                    let next = advance((x, y), *dir, 20, 15);
                    assert!(is_interior(next, 20, 15), "{:?} from {:?} gave {:?}", dir, (x, y), next);
                }
            }
        }
    }

    #[test]
    fn advance_moves_one_cell_away_from_walls() {
        assert_eq!(advance((5, 5), Up, 20, 15), (5, 6));
        assert_eq!(advance((5, 5), Down, 20, 15), (5, 4));
        assert_eq!(advance((5, 5), Left, 20, 15), (4, 5));
        assert_eq!(advance((5, 5), Right, 20, 15), (6, 5));
    }

    #[test]
    fn advance_pins_the_axis_at_walls() {
        assert_eq!(advance((18, 5), Right, 20, 15), (18, 5));
        assert_eq!(advance((1, 5), Left, 20, 15), (1, 5));
        assert_eq!(advance((5, 13), Up, 20, 15), (5, 13));
        assert_eq!(advance((5, 1), Down, 20, 15), (5, 1));
        // Coordinates already on the wall are pulled back inside
        assert_eq!(advance((0, 14), Up, 20, 15), (1, 13));
    }

    #[test]
    fn lay_out_chains_segments_one_step_apart() {
        let snake = Snake::lay_out((5, 5), 3, Right, 20, 15);
        assert_eq!(snake.body(), &[(5, 5), (6, 5), (7, 5)]);
        assert_eq!(snake.head(), (8, 5));
    }

    #[test]
    fn lay_out_with_no_body_is_just_a_head() {
        let snake = Snake::lay_out((4, 4), 0, Up, 20, 15);
        assert!(snake.body().is_empty());
        assert_eq!(snake.head(), (4, 4));
    }

    #[test]
    fn lay_out_collapses_segments_pinned_to_a_wall() {
        let snake = Snake::lay_out((17, 5), 2, Right, 20, 15);
        assert_eq!(snake.body(), &[(17, 5)]);
        assert_eq!(snake.head(), (18, 5));
    }

    #[test]
    fn seeded_snakes_are_straight_chains_inside_the_walls() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let dir = ALL[seed as usize % 4];
            let snake = Snake::seed(&mut rng, 2, dir, 20, 15);

            assert_eq!(snake.body().len(), 2, "seed {} heading {:?}", seed, dir);
            let start = snake.body()[0];
            assert!(start.0 >= 2 && start.0 < 18 && start.1 >= 2 && start.1 < 13);
            assert!(snake.body().iter().all(|pos| is_interior(*pos, 20, 15)));
            assert!(is_interior(snake.head(), 20, 15));

            let mut chain = snake.body().to_vec();
            chain.push(snake.head());
            for pair in chain.windows(2) {
                assert_eq!(pair[1], advance(pair[0], dir, 20, 15));
            }
        }
    }

    #[test]
    fn sample_range_leaves_room_ahead_of_the_start() {
        assert_eq!(sample_range(2, 15, 0), 2..13);
        assert_eq!(sample_range(2, 15, 1), 2..12);
        assert_eq!(sample_range(2, 15, -1), 3..13);
        // Too tight to shift, keep the plain range
        assert_eq!(sample_range(10, 5, 1), 2..3);
    }

    #[test]
    fn seeding_fits_oversized_snakes_into_small_grids() {
        let mut rng = StdRng::seed_from_u64(1);
        let snake = Snake::seed(&mut rng, 10, Up, 5, 5);
        assert!(is_interior(snake.head(), 5, 5));
        assert!(snake.body().iter().all(|pos| is_interior(*pos, 5, 5)));
    }

    #[test]
    fn farthest_prefers_the_most_distant_cell() {
        let body = [(6, 5), (5, 5), (5, 6)];
        assert_eq!(farthest_from((6, 7), &body), Some((5, 5)));
        assert_eq!(farthest_from((6, 7), &[]), None);
    }

    #[test]
    fn farthest_breaks_ties_in_storage_order() {
        let body = [(5, 7), (7, 5), (3, 5)];
        assert_eq!(farthest_from((5, 5), &body), Some((3, 5)));
    }

    #[test]
    fn move_to_shifts_the_snake_forward() {
        let mut snake = Snake::lay_out((3, 5), 2, Right, 20, 15);
        snake.move_to((6, 5), Some((3, 5)));
        assert_eq!(snake.body(), &[(4, 5), (5, 5)]);
        assert_eq!(snake.head(), (6, 5));
    }

    #[test]
    fn move_to_onto_the_old_head_shrinks_the_body() {
        let mut snake = Snake::from_parts(vec![(16, 5), (17, 5)], (18, 5));
        snake.move_to((18, 5), Some((16, 5)));
        assert_eq!(snake.body(), &[(17, 5)]);
        assert_eq!(snake.head(), (18, 5));
    }

    #[test]
    fn bodiless_snake_just_moves_its_head() {
        let mut snake = Snake::from_parts(vec![], (4, 4));
        snake.move_to((4, 5), None);
        assert!(snake.body().is_empty());
        assert_eq!(snake.head(), (4, 5));
    }
}
