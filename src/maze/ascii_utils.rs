/*!
 * # Module de visualisation ASCII du labyrinthe
 *
 * Chaque cellule occupe 3 colonnes et 2 lignes : `+--` pour le mur nord et
 * l'intersection, `|  ` pour le mur ouest et l'intérieur. La dernière
 * colonne et la dernière ligne ferment le plateau.
 *
 * Marqueurs à l'intérieur des cellules :
 * - `*` l'entrée,
 * - `x` la sortie,
 * - `X` l'entrée et la sortie confondues,
 * - `.` une cellule du chemin (si une matrice de solution est fournie).
 */

use crate::maze::board::Board;
use crate::maze::direction::Direction;

/// Caractère affiché à l'intérieur d'une cellule.
fn cell_marker(board: &Board, pos: (i32, i32), solution: Option<&[Vec<bool>]>) -> char {
    let is_entrance = pos == board.entrance();
    let is_exit = pos == board.exit();
    match (is_entrance, is_exit) {
        (true, true) => 'X',
        (true, false) => '*',
        (false, true) => 'x',
        (false, false) => {
            let on_path = solution
                .and_then(|rows| rows.get(pos.1 as usize))
                .and_then(|row| row.get(pos.0 as usize))
                .copied()
                .unwrap_or(false);
            if on_path {
                '.'
            } else {
                ' '
            }
        }
    }
}

/// Génère une représentation ASCII du plateau.
///
/// # Arguments
///
/// * `board` - Le plateau à dessiner.
/// * `solution` - Matrice optionnelle (hauteur x largeur) des cellules du chemin.
///
/// # Retour
///
/// Une `String` de `hauteur * 2 + 1` lignes, sans saut de ligne final.
pub fn visualize_board_ascii(board: &Board, solution: Option<&[Vec<bool>]>) -> String {
    let width = board.width();
    let height = board.height();

    // On prévoit (width * 3 + 1) colonnes, (height * 2 + 1) lignes
    let mut ascii_grid: Vec<Vec<char>> = vec![vec![' '; width * 3 + 1]; height * 2 + 1];

    for y in 0..height {
        for x in 0..width {
            let dir = board.cell(x, y).direction();
            let grid_x = x * 3;
            let grid_y = y * 2;

            // MUR NORD
            if !dir.contains(Direction::NORTH) {
                ascii_grid[grid_y][grid_x + 1] = '-';
                ascii_grid[grid_y][grid_x + 2] = '-';
            }

            // MUR OUEST
            if !dir.contains(Direction::WEST) {
                ascii_grid[grid_y + 1][grid_x] = '|';
            }

            // MUR EST
            if !dir.contains(Direction::EAST) {
                ascii_grid[grid_y + 1][grid_x + 3] = '|';
            }

            // MUR SUD
            if !dir.contains(Direction::SOUTH) {
                ascii_grid[grid_y + 2][grid_x + 1] = '-';
                ascii_grid[grid_y + 2][grid_x + 2] = '-';
            }

            ascii_grid[grid_y + 1][grid_x + 1] =
                cell_marker(board, (x as i32, y as i32), solution);
        }
    }

    // Intersections
    for (row, line) in ascii_grid.iter_mut().enumerate() {
        if row % 2 == 0 {
            for col in (0..=width * 3).step_by(3) {
                line[col] = '+';
            }
        }
    }

    ascii_grid
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
