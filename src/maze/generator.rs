use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::str::FromStr;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::maze::board::Board;
use crate::maze::direction::Direction;
use crate::maze::error::MazeError;

// -----------------------------------------------------------------------------
// Configuration
// -----------------------------------------------------------------------------

/// Placement de l'entrée et de la sortie sur le bord du plateau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Entrée en haut à gauche (ouverte au nord), sortie en bas à droite (ouverte au sud).
    CornerFixed,
    /// Entrée sur la première ligne, sortie sur la dernière, colonnes tirées au hasard.
    RandomRows,
    /// Entrée en bas de la première colonne (ouverte à l'ouest), sortie sur la
    /// dernière colonne (ouverte à l'est), en haut si la largeur est impaire,
    /// en bas sinon.
    #[default]
    Alternating,
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corner" | "corner-fixed" => Ok(Placement::CornerFixed),
            "random" | "random-rows" => Ok(Placement::RandomRows),
            "alternating" => Ok(Placement::Alternating),
            _ => Err(format!("unknown placement: {}", s)),
        }
    }
}

/// Poids donné aux cellules poussées dans la frontière.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightPolicy {
    /// Un poids aléatoire à chaque ajout : forme de labyrinthe aléatoire.
    #[default]
    Random,
    /// Un compteur croissant : la plus ancienne cellule d'abord, couloirs plus longs.
    Counter,
}

impl FromStr for WeightPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(WeightPolicy::Random),
            "counter" => Ok(WeightPolicy::Counter),
            _ => Err(format!("unknown weight policy: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub placement: Placement,
    pub weights: WeightPolicy,
    /// Mélange les directions candidates avant d'en choisir une.
    pub shuffle_directions: bool,
    /// Graine du générateur aléatoire; `None` pour une graine du système.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            weights: WeightPolicy::default(),
            shuffle_directions: true,
            seed: None,
        }
    }
}

// -----------------------------------------------------------------------------
// Frontière
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHeapElement {
    pub coords: (i32, i32),
    pub weight: u64,
}

// `BinaryHeap` est un tas max : on inverse l'ordre pour sortir le plus petit poids.
impl Ord for FieldHeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.coords.cmp(&self.coords))
    }
}

impl PartialOrd for FieldHeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Tas min de cellules ordonnées par poids croissant.
#[derive(Debug, Default)]
pub struct FieldHeap {
    heap: BinaryHeap<FieldHeapElement>,
}

impl FieldHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, coords: (i32, i32), weight: u64) {
        self.heap.push(FieldHeapElement { coords, weight });
    }

    /// Retire l'élément de plus petit poids.
    pub fn pop(&mut self) -> Option<FieldHeapElement> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Generator
// -----------------------------------------------------------------------------

/// Générateur de labyrinthes parfaits par croissance d'un arbre couvrant
/// (variante aléatoire de Prim).
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
    counter: u64,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng,
            counter: 0,
        }
    }

    fn next_weight(&mut self) -> u64 {
        match self.config.weights {
            WeightPolicy::Random => self.rng.random(),
            WeightPolicy::Counter => {
                self.counter += 1;
                self.counter
            }
        }
    }

    /// Place l'entrée et la sortie; retourne les ouvertures vers l'extérieur
    /// à ajouter une fois le labyrinthe creusé.
    fn place_entrance_and_exit(&mut self, board: &mut Board) -> (Direction, Direction) {
        let last_x = board.width() as i32 - 1;
        let last_y = board.height() as i32 - 1;

        let (entrance, exit, openings) = match self.config.placement {
            Placement::RandomRows if last_y > 0 => {
                let entrance_x = self.rng.random_range(0..=last_x);
                let exit_x = self.rng.random_range(0..=last_x);
                (
                    (entrance_x, 0),
                    (exit_x, last_y),
                    (Direction::NORTH, Direction::SOUTH),
                )
            }
            Placement::CornerFixed | Placement::RandomRows => (
                (0, 0),
                (last_x, last_y),
                (Direction::NORTH, Direction::SOUTH),
            ),
            Placement::Alternating => {
                let exit_y = if board.width() % 2 == 1 { 0 } else { last_y };
                (
                    (0, last_y),
                    (last_x, exit_y),
                    (Direction::WEST, Direction::EAST),
                )
            }
        };

        *board.entrance_mut() = entrance;
        *board.exit_mut() = exit;
        openings
    }

    /// Génère un labyrinthe parfait de `width` x `height` cellules.
    ///
    /// Le plateau retourné est cohérent (`validate`) et toutes ses cellules
    /// sont accessibles depuis l'entrée.
    pub fn generate(&mut self, width: usize, height: usize) -> Result<Board, MazeError> {
        let mut board = Board::new(width, height)?;
        let (entrance_opening, exit_opening) = self.place_entrance_and_exit(&mut board);
        self.counter = 0;

        let mut frontier = FieldHeap::new();
        let first_weight = self.next_weight();
        frontier.push(board.entrance(), first_weight);

        let mut pops = 0usize;
        let mut carved = 0usize;
        while let Some(FieldHeapElement { coords, .. }) = frontier.pop() {
            pops += 1;
            let mut candidates = board
                .cell(coords.0 as usize, coords.1 as usize)
                .direction()
                .negate()
                .decompose();
            if self.config.shuffle_directions {
                candidates.shuffle(&mut self.rng);
            }

            let picked = candidates.into_iter().find(|dir| match dir.new_position(coords) {
                Ok(next) => {
                    board.in_bounds(next)
                        && board
                            .cell(next.0 as usize, next.1 as usize)
                            .direction()
                            .is_empty()
                }
                Err(_) => false,
            });

            if let Some(dir) = picked {
                let next = board.carve(coords, dir)?;
                carved += 1;
                if next != board.exit() {
                    let weight = self.next_weight();
                    frontier.push(next, weight);
                }
                let weight = self.next_weight();
                frontier.push(coords, weight);
            }
        }
        debug!("Frontier drained after {} pops, {} passages carved", pops, carved);

        let (entrance, exit) = (board.entrance(), board.exit());
        board
            .at(entrance.0 as usize, entrance.1 as usize)
            .add_direction(entrance_opening);
        board
            .at(exit.0 as usize, exit.1 as usize)
            .add_direction(exit_opening);

        debug_assert!(board.validate());
        info!(
            "Generated {}x{} maze, entrance {:?}, exit {:?}, complexity {}",
            width,
            height,
            entrance,
            exit,
            board.complexity()
        );
        Ok(board)
    }
}

/// Génère un labyrinthe avec la configuration par défaut.
pub fn generate(width: usize, height: usize) -> Result<Board, MazeError> {
    Generator::new(GeneratorConfig::default()).generate(width, height)
}
