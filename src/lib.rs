//! Génération, vérification, résolution et rendu de labyrinthes parfaits.
//!
//! Un [`Board`] est un arbre couvrant de la grille : chaque cellule connaît
//! ses passages ouverts, le [`Generator`] le construit, [`Board::walk`] le
//! parcourt depuis l'entrée et les modules de rendu le dessinent.

pub mod maze;

pub use maze::board::{Board, VisitMatrix};
pub use maze::cell::{Cell, CellState};
pub use maze::direction::Direction;
pub use maze::error::MazeError;
pub use maze::generator::{generate, Generator, GeneratorConfig, Placement, WeightPolicy};
pub use maze::painter::{paint, Raster};

/// Taille en pixels d'une cellule, murs compris
pub const DEFAULT_CELL_SIZE: usize = 10;
/// Épaisseur en pixels des murs
pub const DEFAULT_WALL_THICKNESS: usize = 2;
