use std::io;
use thiserror::Error;

use crate::maze::direction::Direction;

/// Erreurs remontées par le labyrinthe (génération, parcours, rendu).
#[derive(Debug, Error)]
pub enum MazeError {
    /// Largeur ou hauteur inférieure à 1 (ou lignes de tailles différentes).
    #[error("Invalid board dimensions: {width}x{height}")]
    InvalidDimensions {
        width: usize,
        height: usize,
    },

    /// Décalage demandé pour une direction composée ou vide.
    #[error("Unresolvable delta for direction {0}")]
    UnresolvableDelta(Direction),

    /// Le parcours sort du plateau ailleurs que par l'entrée ou la sortie.
    #[error("Board boundary violation at ({x}, {y})")]
    BoundaryViolation {
        /// Coordonnée hors plateau atteinte.
        x: i32,
        y: i32,
    },

    /// Paramètres de dessin incohérents.
    #[error("Invalid geometry: cell size {cell_size}, wall thickness {wall_thickness}")]
    InvalidGeometry {
        cell_size: usize,
        wall_thickness: usize,
    },

    /// Image trop grande pour les champs 32 bits de l'en-tête BMP.
    #[error("Raster too large for BMP: {width}x{height}")]
    RasterTooLarge {
        width: usize,
        height: usize,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
