use crate::maze::board::Board;
use crate::maze::direction::Direction;
use crate::maze::error::MazeError;

/// Couleur RGB d'un pixel.
pub type Rgb = [u8; 3];

/// Quelques couleurs
pub const COLOR_BACKGROUND: Rgb = [0xff, 0xff, 0xff]; // blanc
pub const COLOR_WALL: Rgb = [0x00, 0x00, 0x00]; // noir
pub const COLOR_PATH: Rgb = [0x00, 0x00, 0xff]; // bleu

/// Image en mémoire : `width * height` pixels, ligne par ligne.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Raster {
    pub fn new(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Panique si (x, y) est hors de l'image.
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of raster", x, y);
        self.pixels[y * self.width + x]
    }

    /// Ligne `y` de l'image.
    pub fn row(&self, y: usize) -> &[Rgb] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Remplit le rectangle [x0, x1) x [y0, y1), tronqué aux bords de l'image.
    pub fn fill_rect(&mut self, (x0, y0): (usize, usize), (x1, y1): (usize, usize), color: Rgb) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels[y * self.width + x] = color;
            }
        }
    }
}

/// Géométrie d'une cellule en pixels.
struct CellBlock {
    x0: usize,
    y0: usize,
    cell_size: usize,
    wall: usize,
}

impl CellBlock {
    /// Rectangle du mur (ou du passage) de la cellule dans une direction simple.
    fn side(&self, dir: Direction) -> ((usize, usize), (usize, usize)) {
        let (x0, y0, c, w) = (self.x0, self.y0, self.cell_size, self.wall);
        if dir == Direction::NORTH {
            ((x0 + w, y0), (x0 + c, y0 + w))
        } else if dir == Direction::SOUTH {
            ((x0 + w, y0 + c), (x0 + c, y0 + c + w))
        } else if dir == Direction::WEST {
            ((x0, y0 + w), (x0 + w, y0 + c))
        } else {
            ((x0 + c, y0 + w), (x0 + c + w, y0 + c))
        }
    }

    fn interior(&self) -> ((usize, usize), (usize, usize)) {
        (
            (self.x0 + self.wall, self.y0 + self.wall),
            (self.x0 + self.cell_size, self.y0 + self.cell_size),
        )
    }

    fn corners(&self) -> [(usize, usize); 4] {
        let (x0, y0, c) = (self.x0, self.y0, self.cell_size);
        [(x0, y0), (x0 + c, y0), (x0, y0 + c), (x0 + c, y0 + c)]
    }
}

fn on_path(solution: &[Vec<bool>], (x, y): (i32, i32)) -> bool {
    x >= 0
        && y >= 0
        && solution
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(false)
}

/// Dessine le plateau.
///
/// Chaque cellule occupe `cell_size` pixels de côté, murs compris; l'image
/// mesure donc `largeur * cell_size + wall_thickness` pixels de large. Un mur
/// est dessiné partout où le passage correspondant est fermé. Si une matrice
/// de solution est fournie, ses cellules (et les passages qui les relient)
/// sont remplies avec `COLOR_PATH` avant le dessin des murs.
pub fn paint(
    board: &Board,
    solution: Option<&[Vec<bool>]>,
    cell_size: usize,
    wall_thickness: usize,
) -> Result<Raster, MazeError> {
    if cell_size == 0 || wall_thickness >= cell_size {
        return Err(MazeError::InvalidGeometry {
            cell_size,
            wall_thickness,
        });
    }

    let mut img = Raster::new(
        board.width() * cell_size + wall_thickness,
        board.height() * cell_size + wall_thickness,
        COLOR_BACKGROUND,
    );

    let block = |x: usize, y: usize| CellBlock {
        x0: x * cell_size,
        y0: y * cell_size,
        cell_size,
        wall: wall_thickness,
    };

    // 1) Chemin
    if let Some(solution) = solution {
        for y in 0..board.height() {
            for x in 0..board.width() {
                let pos = (x as i32, y as i32);
                if !on_path(solution, pos) {
                    continue;
                }
                let b = block(x, y);
                let (from, to) = b.interior();
                img.fill_rect(from, to, COLOR_PATH);

                for dir in board.cell(x, y).direction().decompose() {
                    let Ok(next) = dir.new_position(pos) else { continue };
                    if !board.in_bounds(next) || on_path(solution, next) {
                        let (from, to) = b.side(dir);
                        img.fill_rect(from, to, COLOR_PATH);
                    }
                }
            }
        }
    }

    // 2) Murs
    for y in 0..board.height() {
        for x in 0..board.width() {
            let b = block(x, y);
            for (cx, cy) in b.corners() {
                img.fill_rect((cx, cy), (cx + wall_thickness, cy + wall_thickness), COLOR_WALL);
            }
            let open = board.cell(x, y).direction();
            for dir in open.negate().decompose() {
                let (from, to) = b.side(dir);
                img.fill_rect(from, to, COLOR_WALL);
            }
        }
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: Direction = Direction::NORTH;
    const E: Direction = Direction::EAST;
    const S: Direction = Direction::SOUTH;
    const W: Direction = Direction::WEST;

    fn two_by_two() -> Board {
        Board::from_rows(
            vec![vec![E | S, W | S], vec![N | S, N | S]],
            (0, 1),
            (1, 1),
        )
        .unwrap()
    }

    #[test]
    fn test_raster_size() {
        let img = paint(&two_by_two(), None, 10, 2).unwrap();
        assert_eq!(img.width(), 22);
        assert_eq!(img.height(), 22);
        assert_eq!(img.row(0).len(), 22);
    }

    #[test]
    fn test_invalid_geometry() {
        let board = two_by_two();
        assert!(matches!(
            paint(&board, None, 0, 0),
            Err(MazeError::InvalidGeometry { cell_size: 0, .. })
        ));
        assert!(paint(&board, None, 4, 4).is_err());
        assert!(paint(&board, None, 4, 3).is_ok());
    }

    #[test]
    fn test_single_cell_walls() {
        let board = Board::from_rows(vec![vec![N | S]], (0, 0), (0, 0)).unwrap();
        let img = paint(&board, None, 10, 2).unwrap();
        // poteaux
        assert_eq!(img.pixel(0, 0), COLOR_WALL);
        assert_eq!(img.pixel(11, 11), COLOR_WALL);
        // murs ouest et est
        assert_eq!(img.pixel(0, 5), COLOR_WALL);
        assert_eq!(img.pixel(11, 5), COLOR_WALL);
        // ouvertures nord et sud
        assert_eq!(img.pixel(5, 0), COLOR_BACKGROUND);
        assert_eq!(img.pixel(5, 11), COLOR_BACKGROUND);
        assert_eq!(img.pixel(5, 5), COLOR_BACKGROUND);
    }

    #[test]
    fn test_solution_is_filled() {
        let mut board = Board::from_rows(vec![vec![N | S]], (0, 0), (0, 0)).unwrap();
        let solution = board.walk(true).unwrap();
        let img = paint(&board, Some(solution.as_slice()), 10, 2).unwrap();
        assert_eq!(img.pixel(5, 5), COLOR_PATH);
        assert_eq!(img.pixel(5, 0), COLOR_PATH);
        assert_eq!(img.pixel(5, 11), COLOR_PATH);
        assert_eq!(img.pixel(0, 5), COLOR_WALL);
    }

    #[test]
    fn test_inner_walls() {
        let board = two_by_two();
        let img = paint(&board, None, 10, 2).unwrap();
        // mur entre (0,1) et (1,1)
        assert_eq!(img.pixel(10, 15), COLOR_WALL);
        assert_eq!(img.pixel(11, 18), COLOR_WALL);
        // passage entre (0,0) et (1,0)
        assert_eq!(img.pixel(10, 5), COLOR_BACKGROUND);
        // passage entre (0,0) et (0,1)
        assert_eq!(img.pixel(5, 10), COLOR_BACKGROUND);
        // mur nord fermé
        assert_eq!(img.pixel(5, 1), COLOR_WALL);
    }

    #[test]
    fn test_path_between_cells() {
        let mut board = two_by_two();
        let solution = board.walk(true).unwrap();
        let img = paint(&board, Some(solution.as_slice()), 10, 2).unwrap();
        assert_eq!(img.pixel(10, 5), COLOR_PATH);
        assert_eq!(img.pixel(5, 10), COLOR_PATH);
        assert_eq!(img.pixel(10, 15), COLOR_WALL);
    }
}
