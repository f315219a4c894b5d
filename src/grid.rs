use crate::error::SnakeError;
use crate::{Coords, GridInt};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    // Reserved palette entries, nothing writes these yet
    #[allow(dead_code)]
    Corner,
    WallVertical,
    WallHorizontal,
    Empty,
    Head,
    Body,
    #[allow(dead_code)]
    Tail,
    #[allow(dead_code)]
    Food,
    #[allow(dead_code)]
    Collision,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Corner => '🟧',
            Cell::WallVertical => '⬛',
            Cell::WallHorizontal => '⬛',
            Cell::Empty => '⬜',
            Cell::Head => '😳',
            Cell::Body => '🟩',
            Cell::Tail => '🟦',
            Cell::Food => '🍎',
            Cell::Collision => '💥',
        }
    }
}

/// Snake cells found by a full scan of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub head: Option<Coords>,
    /// Row-major storage order
    pub body: Vec<Coords>,
}

/// The playfield. Row 0 is stored first but printed last, so it ends up at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: GridInt,
    height: GridInt,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: GridInt, height: GridInt) -> Result<Self, SnakeError> {
        if width < 3 || height < 3 {
            return Err(SnakeError::InvalidDimensions { width, height });
        }

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let cell = if y == 0 || y == height - 1 {
                    Cell::WallHorizontal
                } else if x == 0 || x == width - 1 {
                    Cell::WallVertical
                } else {
                    Cell::Empty
                };
                cells.push(cell);
            }
        }

        Ok(Grid { width, height, cells })
    }

    pub fn width(&self) -> GridInt {
        self.width
    }

    pub fn height(&self) -> GridInt {
        self.height
    }

    pub fn get(&self, pos: Coords) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Coords, cell: Cell) {
        let i = self.index(pos);
        self.cells[i] = cell;
    }

    /// One string per row, top row of the screen first.
    pub fn serialize(&self) -> Vec<String> {
        let mut rows: Vec<String> = self
            .cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|cell| cell.glyph()).collect())
            .collect();

        rows.reverse();
        rows
    }

    pub fn locate(&self) -> Located {
        let mut head = None;
        let mut body = vec![];

        for y in 0..self.height {
            for x in 0..self.width {
                match self.get((x, y)) {
                    Cell::Head => head = Some((x, y)),
                    Cell::Body => body.push((x, y)),
                    _ => {}
                }
            }
        }

        Located { head, body }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Coords) -> usize {
        let (x, y) = pos;
        assert!(
            x >= 0 && x < self.width && y >= 0 && y < self.height,
            "({}, {}) is outside the {}x{} grid", x, y, self.width, self.height
        );

        self.width as usize * y as usize + x as usize
    }
}

#[cfg(test)]
impl Cell {
    fn from_glyph(ch: char) -> Option<Self> {
        // The two wall kinds share a glyph; only the orientation the border uses can be recovered
        match ch {
            '🟧' => Some(Cell::Corner),
            '⬛' => Some(Cell::WallHorizontal),
            '⬜' => Some(Cell::Empty),
            '😳' => Some(Cell::Head),
            '🟩' => Some(Cell::Body),
            '🟦' => Some(Cell::Tail),
            '🍎' => Some(Cell::Food),
            '💥' => Some(Cell::Collision),
            _ => None,
        }
    }
}

#[cfg(test)]
impl Grid {
    /// Inverse of [`Grid::serialize`]: top screen row first.
    pub fn parse(rows: &[&str]) -> Self {
        let height = rows.len() as GridInt;
        let width = rows[0].chars().count() as GridInt;
        let mut grid = Grid::new(width, height).unwrap();

        for (i, row) in rows.iter().enumerate() {
            let y = height - 1 - i as GridInt;
            for (x, ch) in row.chars().enumerate() {
                let x = x as GridInt;
                let cell = match Cell::from_glyph(ch).unwrap() {
                    Cell::WallHorizontal if y != 0 && y != height - 1 => Cell::WallVertical,
                    cell => cell,
                };
                grid.set((x, y), cell);
            }
        }

        grid
    }
}
