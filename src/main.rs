use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::info;

use maze_forge::maze::ascii_utils::visualize_board_ascii;
use maze_forge::maze::bitmap::write_bmp;
use maze_forge::maze::json_utils::maze_summary;
use maze_forge::{
    paint, Board, Generator, GeneratorConfig, Placement, VisitMatrix, WeightPolicy,
    DEFAULT_CELL_SIZE, DEFAULT_WALL_THICKNESS,
};

/// Génère un labyrinthe parfait et l'affiche ou l'écrit en image BMP
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Largeur en cellules
    width: usize,

    /// Hauteur en cellules
    height: usize,

    /// Fichier image (BMP) à écrire; sans lui, le labyrinthe est affiché en ASCII
    output: Option<PathBuf>,

    /// Graine du générateur aléatoire
    #[arg(long)]
    seed: Option<u64>,

    /// Placement de l'entrée et de la sortie: corner, random-rows, alternating
    #[arg(long, default_value = "alternating")]
    placement: Placement,

    /// Poids de la frontière: random, counter
    #[arg(long, default_value = "random")]
    weights: WeightPolicy,

    /// Essaie les directions dans l'ordre N, E, S, W au lieu de les mélanger
    #[arg(long)]
    no_shuffle: bool,

    /// Taille en pixels d'une cellule
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: usize,

    /// Épaisseur en pixels des murs
    #[arg(long, default_value_t = DEFAULT_WALL_THICKNESS)]
    wall_thickness: usize,

    /// Montre toutes les cellules accessibles au lieu du seul chemin
    #[arg(long)]
    no_solve: bool,

    /// Affiche un résumé JSON du labyrinthe
    #[arg(long)]
    report: bool,
}

fn draw_to_file(
    board: &Board,
    solution: &VisitMatrix,
    args: &Args,
    path: &Path,
) -> anyhow::Result<()> {
    let img = paint(board, Some(solution.as_slice()), args.cell_size, args.wall_thickness)?;
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_bmp(&img, &mut writer).with_context(|| format!("cannot write {}", path.display()))?;
    info!("Wrote {}x{} image to {}", img.width(), img.height(), path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let config = GeneratorConfig {
        placement: args.placement,
        weights: args.weights,
        shuffle_directions: !args.no_shuffle,
        seed: args.seed,
    };
    let mut board = Generator::new(config)
        .generate(args.width, args.height)
        .context("cannot generate the maze")?;

    let solution = board
        .walk(!args.no_solve)
        .context("generated maze is malformed")?;

    match &args.output {
        Some(path) => draw_to_file(&board, &solution, &args, path)?,
        None => println!("{}", visualize_board_ascii(&board, Some(solution.as_slice()))),
    }

    if args.report {
        println!("{}", maze_summary(&board, Some(solution.as_slice())));
    }

    Ok(())
}
