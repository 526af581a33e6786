use serde_json::{json, Value};

use crate::maze::board::Board;

/// Nombre de cellules marquées dans une matrice de parcours.
pub fn path_length(solution: &[Vec<bool>]) -> usize {
    solution.iter().flatten().filter(|&&visited| visited).count()
}

/// Résumé lisible par une machine : dimensions, entrée/sortie, complexité
/// et longueur du chemin si une solution est fournie.
pub fn maze_summary(board: &Board, solution: Option<&[Vec<bool>]>) -> Value {
    let (entrance_x, entrance_y) = board.entrance();
    let (exit_x, exit_y) = board.exit();
    json!({
        "width": board.width(),
        "height": board.height(),
        "entrance": { "x": entrance_x, "y": entrance_y },
        "exit": { "x": exit_x, "y": exit_y },
        "complexity": board.complexity(),
        "path_length": solution.map(path_length),
    })
}
