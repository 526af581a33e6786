use std::fmt;

use bitflags::bitflags;

use crate::maze::error::MazeError;

bitflags! {
    /// Ensemble de directions cardinales, stocké comme un masque de 4 bits.
    ///
    /// Une valeur "simple" contient exactement un bit (North, East, South ou West),
    /// une valeur composée en contient plusieurs, `empty()` n'en contient aucun.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Direction: u8 {
        const NORTH = 1 << 0;
        const EAST  = 1 << 1;
        const SOUTH = 1 << 2;
        const WEST  = 1 << 3;
    }
}

impl Default for Direction {
    fn default() -> Direction {
        Direction::empty()
    }
}

/// Pour chaque direction simple : son opposée, son décalage et sa lettre.
const STEPS: [(Direction, Direction, (i32, i32), char); 4] = [
    (Direction::NORTH, Direction::SOUTH, (0, -1), 'N'),
    (Direction::EAST, Direction::WEST, (1, 0), 'E'),
    (Direction::SOUTH, Direction::NORTH, (0, 1), 'S'),
    (Direction::WEST, Direction::EAST, (-1, 0), 'W'),
];

impl Direction {
    /// Vrai si le masque contient exactement une direction.
    pub fn is_single(self) -> bool {
        self.bits().count_ones() == 1
    }

    /// Fait demi tour (par ex. North -> South).
    ///
    /// Retourne un masque vide pour un masque vide ou composé.
    pub fn opposite(self) -> Self {
        STEPS
            .iter()
            .find(|&&(dir, ..)| dir == self)
            .map_or(Direction::empty(), |&(_, opposite, ..)| opposite)
    }

    /// Complément dans l'univers des 4 directions.
    pub fn negate(self) -> Self {
        self.complement()
    }

    /// Liste des directions simples présentes, dans l'ordre N, E, S, W.
    pub fn decompose(self) -> Vec<Direction> {
        self.iter().collect()
    }

    /// Décalage (dx, dy) d'une direction simple; y croît vers le sud.
    pub fn delta(self) -> Result<(i32, i32), MazeError> {
        STEPS
            .iter()
            .find(|&&(dir, ..)| dir == self)
            .map(|&(_, _, delta, _)| delta)
            .ok_or(MazeError::UnresolvableDelta(self))
    }

    /// Nouvelle position après un pas dans cette direction.
    pub fn new_position(self, (x, y): (i32, i32)) -> Result<(i32, i32), MazeError> {
        let (dx, dy) = self.delta()?;
        Ok((x + dx, y + dy))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        for &(dir, _, _, name) in STEPS.iter() {
            if self.contains(dir) {
                write!(f, "{}", name)?;
            }
        }
        Ok(())
    }
}
