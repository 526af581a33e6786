use crate::maze::direction::Direction;

/// État transitoire d'une cellule pendant un parcours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    NotVisited,
    Visited,
}

/// Représente une cellule du labyrinthe.
///
/// Une cellule possède l'ensemble des passages ouverts vers ses voisines
/// et un état indiquant si elle a été visitée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Les directions dans lesquelles un passage est ouvert.
    passages: Direction,
    /// L'état de la cellule.
    state: CellState,
}

impl Cell {
    /// Crée une cellule fermée et non visitée.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(passages: Direction) -> Self {
        Self {
            passages,
            state: CellState::NotVisited,
        }
    }

    pub fn direction(&self) -> Direction {
        self.passages
    }

    pub fn set_direction(&mut self, dir: Direction) {
        self.passages = dir;
    }

    /// Ouvre un ou plusieurs passages supplémentaires.
    pub fn add_direction(&mut self, dir: Direction) {
        self.passages |= dir;
    }

    pub fn is_visited(&self) -> bool {
        self.state == CellState::Visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.state = if visited {
            CellState::Visited
        } else {
            CellState::NotVisited
        };
    }
}
