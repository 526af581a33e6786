use std::fmt;

use log::warn;

use crate::maze::ascii_utils::visualize_board_ascii;
use crate::maze::cell::Cell;
use crate::maze::direction::Direction;
use crate::maze::error::MazeError;

/// Matrice (hauteur x largeur) des cellules visitées par `Board::walk`.
pub type VisitMatrix = Vec<Vec<bool>>;

/// Plateau rectangulaire du labyrinthe.
///
/// Les cellules sont stockées ligne par ligne (`cells[y][x]`). Deux cellules
/// voisines doivent toujours être d'accord sur le mur qu'elles partagent :
/// (x, y) a East ouvert si et seulement si (x + 1, y) a West ouvert, et de
/// même pour South/North.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    entrance: (i32, i32),
    exit: (i32, i32),
}

/// Cadre de la pile de parcours : une cellule en cours d'exploration.
struct WalkFrame {
    pos: (i32, i32),
    directions: Vec<Direction>,
    next: usize,
    reaches_exit: bool,
}

impl Board {
    /// Crée un plateau vide : toutes les cellules sont fermées.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            cells: vec![vec![Cell::new(); width]; height],
            entrance: (0, 0),
            exit: (0, 0),
        })
    }

    /// Construit un plateau à partir des passages de chaque cellule, ligne par ligne.
    ///
    /// Aucun contrôle de cohérence des murs n'est fait ici, voir `validate`.
    pub fn from_rows(
        rows: Vec<Vec<Direction>>,
        entrance: (i32, i32),
        exit: (i32, i32),
    ) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let mut board = Self {
            cells: rows
                .into_iter()
                .map(|row| row.into_iter().map(Cell::with_direction).collect())
                .collect(),
            entrance,
            exit,
        };
        for (x, y) in [entrance, exit] {
            if !board.in_bounds((x, y)) {
                return Err(MazeError::BoundaryViolation { x, y });
            }
        }
        board.clear_visited();
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.cells[0].len()
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Récupère une cellule en écriture.
    ///
    /// Panique si (x, y) est hors du plateau.
    pub fn at(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.cells[y][x]
    }

    /// Récupère une cellule en lecture seule.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y][x]
    }

    pub fn entrance(&self) -> (i32, i32) {
        self.entrance
    }

    pub fn entrance_mut(&mut self) -> &mut (i32, i32) {
        &mut self.entrance
    }

    pub fn exit(&self) -> (i32, i32) {
        self.exit
    }

    pub fn exit_mut(&mut self) -> &mut (i32, i32) {
        &mut self.exit
    }

    /// Vérifie si une position est sur le plateau.
    pub fn in_bounds(&self, (x, y): (i32, i32)) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// Ouvre le passage `dir` depuis `from` et le passage opposé chez la voisine.
    ///
    /// Retourne la position de la voisine.
    pub fn carve(&mut self, from: (i32, i32), dir: Direction) -> Result<(i32, i32), MazeError> {
        let to = dir.new_position(from)?;
        if !self.in_bounds(to) {
            return Err(MazeError::BoundaryViolation { x: to.0, y: to.1 });
        }
        self.at(from.0 as usize, from.1 as usize).add_direction(dir);
        self.at(to.0 as usize, to.1 as usize)
            .add_direction(dir.opposite());
        Ok(to)
    }

    /// Vérifie que toutes les paires de cellules voisines sont d'accord sur leur mur commun.
    pub fn validate(&self) -> bool {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let dir = self.cell(x, y).direction();
                if x + 1 < self.width() {
                    let east = self.cell(x + 1, y).direction();
                    if dir.contains(Direction::EAST) != east.contains(Direction::WEST) {
                        return false;
                    }
                }
                if y + 1 < self.height() {
                    let south = self.cell(x, y + 1).direction();
                    if dir.contains(Direction::SOUTH) != south.contains(Direction::NORTH) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Nombre de carrefours : cellules ayant plus de deux passages ouverts.
    pub fn complexity(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.direction().decompose().len() > 2)
            .count()
    }

    /// Parcours en profondeur depuis l'entrée.
    ///
    /// Sans `solve`, la matrice retournée contient toutes les cellules
    /// accessibles. Avec `solve`, une cellule dont l'exploration n'a pas mené
    /// à la sortie est retirée de la matrice une fois ses voisines explorées :
    /// il ne reste que le chemin entrée -> sortie.
    ///
    /// Sortir du plateau n'est permis que depuis l'entrée ou la sortie.
    pub fn walk(&mut self, solve: bool) -> Result<VisitMatrix, MazeError> {
        let mut visit_matrix = vec![vec![false; self.width()]; self.height()];
        self.clear_visited();

        let start = self.enter(self.entrance, &mut visit_matrix);
        let mut stack = vec![start];

        while let Some(frame) = stack.last_mut() {
            if let Some(&dir) = frame.directions.get(frame.next) {
                frame.next += 1;
                let from = frame.pos;
                let next = dir.new_position(from)?;

                if !self.in_bounds(next) {
                    if from != self.entrance && from != self.exit {
                        warn!("Walk left the board at {:?} from {:?}", next, from);
                        return Err(MazeError::BoundaryViolation {
                            x: next.0,
                            y: next.1,
                        });
                    }
                    continue;
                }

                if !self.cell(next.0 as usize, next.1 as usize).is_visited() {
                    let child = self.enter(next, &mut visit_matrix);
                    stack.push(child);
                }
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let (x, y) = (done.pos.0 as usize, done.pos.1 as usize);
            if done.reaches_exit {
                if let Some(parent) = stack.last_mut() {
                    parent.reaches_exit = true;
                }
            } else if solve {
                visit_matrix[y][x] = false;
            }
        }

        Ok(visit_matrix)
    }

    fn enter(&mut self, pos: (i32, i32), visit_matrix: &mut VisitMatrix) -> WalkFrame {
        let (x, y) = (pos.0 as usize, pos.1 as usize);
        let cell = self.at(x, y);
        cell.set_visited(true);
        let directions = cell.direction().decompose();
        visit_matrix[y][x] = true;
        WalkFrame {
            pos,
            directions,
            next: 0,
            reaches_exit: pos == self.exit,
        }
    }

    fn clear_visited(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.set_visited(false);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", visualize_board_ascii(self, None))
    }
}

// -----------------------------------------------------------------------------
// TEST
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    const N: Direction = Direction::NORTH;
    const E: Direction = Direction::EAST;
    const S: Direction = Direction::SOUTH;
    const W: Direction = Direction::WEST;
    const NONE: Direction = Direction::empty();

    struct WalkingTest {
        board: Board,
        visit_matrix: VisitMatrix,
    }

    fn board(rows: Vec<Vec<Direction>>, entrance: (i32, i32), exit: (i32, i32)) -> Board {
        Board::from_rows(rows, entrance, exit).unwrap()
    }

    fn walking_tests() -> Vec<WalkingTest> {
        vec![
            // + +
            // | |
            // + +
            WalkingTest {
                board: board(vec![vec![N | S]], (0, 0), (0, 0)),
                visit_matrix: vec![vec![true]],
            },
            // +-+-+
            // |   |
            // + + +
            // | | |
            // + + +
            WalkingTest {
                board: board(
                    vec![vec![E | S, W | S], vec![N | S, N | S]],
                    (0, 1),
                    (1, 1),
                ),
                visit_matrix: vec![vec![true, true], vec![true, true]],
            },
            // +-+-+
            //     |
            // +-+ +
            // |X|
            // +-+-+
            WalkingTest {
                board: board(
                    vec![vec![E | W, W | S], vec![NONE, N | E]],
                    (0, 0),
                    (1, 1),
                ),
                visit_matrix: vec![vec![true, true], vec![false, true]],
            },
            // +-+-+
            //
            // +-+-+
            // |X X|
            // +-+-+
            WalkingTest {
                board: board(vec![vec![E | W, E | W], vec![E, W]], (0, 0), (1, 0)),
                visit_matrix: vec![vec![true, true], vec![false, false]],
            },
        ]
    }

    /// Plateau avec un cul-de-sac à droite : le chemin descend à gauche.
    fn dead_end_board() -> Board {
        board(
            vec![vec![N | E | S, W | S], vec![N | S, N]],
            (0, 0),
            (0, 1),
        )
    }

    #[test]
    fn test_creating_board() {
        let (width, height) = (3, 2);
        let board = Board::new(width, height).unwrap();
        assert_eq!(board.width(), width);
        assert_eq!(board.height(), height);
        for y in 0..height {
            for x in 0..width {
                assert!(board.cell(x, y).direction().is_empty());
                assert!(!board.cell(x, y).is_visited());
            }
        }
    }

    #[test]
    fn test_creating_board_with_invalid_dimensions() {
        assert!(matches!(
            Board::new(0, 3),
            Err(MazeError::InvalidDimensions { width: 0, height: 3 })
        ));
        assert!(Board::new(3, 0).is_err());
        assert!(Board::from_rows(vec![], (0, 0), (0, 0)).is_err());
        assert!(Board::from_rows(vec![vec![N], vec![N, S]], (0, 0), (0, 0)).is_err());
        assert!(matches!(
            Board::from_rows(vec![vec![N]], (0, 0), (1, 0)),
            Err(MazeError::BoundaryViolation { x: 1, y: 0 })
        ));
    }

    #[test]
    fn test_walking() {
        for (i, mut test) in walking_tests().into_iter().enumerate() {
            let visit_matrix = test.board.walk(true).unwrap();
            assert_eq!(visit_matrix, test.visit_matrix, "walking test {}", i);
        }
    }

    #[test]
    fn test_walking_full_reachability() {
        let mut board = board(
            vec![vec![E | S, W | S], vec![N | S, N | S]],
            (0, 1),
            (1, 1),
        );
        assert_eq!(
            board.walk(false).unwrap(),
            vec![vec![true, true], vec![true, true]]
        );
    }

    #[test]
    fn test_solve_prunes_dead_ends() {
        let mut board = dead_end_board();
        assert!(board.validate());
        assert_eq!(
            board.walk(false).unwrap(),
            vec![vec![true, true], vec![true, true]]
        );
        assert_eq!(
            board.walk(true).unwrap(),
            vec![vec![true, false], vec![true, false]]
        );
    }

    #[test]
    fn test_walk_is_repeatable() {
        let mut board = dead_end_board();
        let first = board.walk(true).unwrap();
        let second = board.walk(true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_walk_boundary_violation() {
        let mut board = board(vec![vec![E | W, N | E | W, E | W]], (0, 0), (2, 0));
        assert!(matches!(
            board.walk(false),
            Err(MazeError::BoundaryViolation { x: 1, y: -1 })
        ));
        assert!(matches!(
            board.walk(true),
            Err(MazeError::BoundaryViolation { x: 1, y: -1 })
        ));
    }

    #[test]
    fn test_validate() {
        assert!(board(vec![vec![E | S, W | S], vec![N | S, N | S]], (0, 1), (1, 1)).validate());
        assert!(!board(vec![vec![E, NONE], vec![NONE, NONE]], (0, 0), (1, 1)).validate());
        assert!(!board(vec![vec![NONE, NONE], vec![NONE, W]], (0, 0), (1, 1)).validate());
        assert!(!board(vec![vec![S, NONE], vec![NONE, NONE]], (0, 0), (1, 1)).validate());
        assert!(!board(vec![vec![NONE, NONE], vec![NONE, N]], (0, 0), (1, 1)).validate());
    }

    #[test]
    fn test_complexity() {
        assert_eq!(dead_end_board().complexity(), 1);
        assert_eq!(Board::new(4, 4).unwrap().complexity(), 0);
        let crossroads = board(
            vec![
                vec![S, S, S],
                vec![E | N, N | E | S | W, W | N],
                vec![NONE, N, NONE],
            ],
            (0, 0),
            (2, 0),
        );
        assert!(crossroads.validate());
        assert_eq!(crossroads.complexity(), 1);
    }

    #[test]
    fn test_carve_round_trip() {
        let mut board = Board::new(3, 3).unwrap();
        for dir in Direction::all().decompose() {
            let to = board.carve((1, 1), dir).unwrap();
            assert!(board.cell(1, 1).direction().decompose().contains(&dir));
            assert!(board
                .cell(to.0 as usize, to.1 as usize)
                .direction()
                .contains(dir.opposite()));
        }
        assert!(board.validate());
        assert!(matches!(
            board.carve((0, 0), N),
            Err(MazeError::BoundaryViolation { x: 0, y: -1 })
        ));
        assert!(matches!(
            board.carve((0, 0), E | S),
            Err(MazeError::UnresolvableDelta(_))
        ));
    }

    #[test]
    fn test_entrance_and_exit_are_settable() {
        let mut board = Board::new(2, 2).unwrap();
        *board.entrance_mut() = (1, 0);
        *board.exit_mut() = (0, 1);
        assert_eq!(board.entrance(), (1, 0));
        assert_eq!(board.exit(), (0, 1));
    }
}
