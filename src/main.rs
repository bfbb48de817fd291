use docopt::Docopt;
use error_chain::bail;
use log::info;
use mazes3d::{
    coordinates::ChamberCoordinate,
    maze::{self, Maze, MazeConfigBuilder},
};
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Mazes 3D

Usage:
    mazes3d_driver -h | --help
    mazes3d_driver [--layers=<n>] [--rows=<n>] [--columns=<n>] [--seed=<n>] [--finish-rows=<n>] [--entrance-column=<n>] [--exit-row=<n> --exit-column=<n>] [--out=<path>] [--no-counts] [--show-path] [--save-edges=<path>]

Options:
    -h --help                Show this screen.
    --layers=<n>             Floors of chambers [default: 4].
    --rows=<n>               Chambers from north to south on each floor [default: 7].
    --columns=<n>            Chambers from west to east on each floor [default: 7].
    --seed=<n>               Seed for the random number generator. A random seed is used and logged if not given.
    --finish-rows=<n>        The exit is placed on the top floor within the n northernmost rows. Defaults to the north half.
    --entrance-column=<n>    Column of the entrance on the southern face of the ground floor. Random if not given.
    --exit-row=<n>           Row of the exit chamber on the top floor. Requires --exit-column.
    --exit-column=<n>        Column of the exit chamber on the top floor. Requires --exit-row.
    --out=<path>             Output file path for the build plan. Printed to stdout if not given.
    --no-counts              Leave the block counts out of the build plan.
    --show-path              Print the route from the entrance to the exit chamber to stderr.
    --save-edges=<path>      Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#chambers) m(#passages). Line 2+ passage between chambers. Uses 1-based row-major chamber indices.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_layers: usize,
    flag_rows: usize,
    flag_columns: usize,
    flag_seed: Option<u64>,
    flag_finish_rows: Option<usize>,
    flag_entrance_column: Option<usize>,
    flag_exit_row: Option<u32>,
    flag_exit_column: Option<u32>,
    flag_out: String,
    flag_no_counts: bool,
    flag_show_path: bool,
    flag_save_edges: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Maze(::mazes3d::errors::MazeError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let exit = match (args.flag_exit_row, args.flag_exit_column) {
        (Some(row), Some(column)) => {
            let top_layer = (args.flag_layers as u32).saturating_sub(1);
            Some(ChamberCoordinate::new(top_layer, row, column))
        }
        (None, None) => None,
        _ => bail!("--exit-row and --exit-column must be given together"),
    };

    let config = MazeConfigBuilder::new()
        .layers(args.flag_layers)
        .rows(args.flag_rows)
        .columns(args.flag_columns)
        .seed(args.flag_seed)
        .finish_rows(args.flag_finish_rows.map(|rows| 0..rows))
        .entrance_column(args.flag_entrance_column)
        .exit(exit)
        .build()?;

    let maze = maze::generate(&config)?;
    info!("maze generated with seed {}", maze.seed());

    let mut plan = String::new();
    if !args.flag_no_counts {
        plan.push_str(&maze.voxels().counts().to_string());
        plan.push('\n');
    }
    plan.push_str(&maze.voxels().to_string());

    if args.flag_out.is_empty() {
        print!("{}", plan);
    } else {
        write_text_to_file(&plan, &args.flag_out)
            .chain_err(|| format!("Failed to write build plan to text file {}", args.flag_out))?;
    }

    if args.flag_show_path {
        let path = maze.solution().ok_or("The exit cannot be reached from the entrance.")?;
        let route = path.iter().map(|coord| coord.to_string()).collect::<Vec<_>>().join(" -> ");
        eprintln!("route ({} chambers): {}", path.len(), route);
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {
    let lattice = maze.lattice();

    let mut graph_data = String::new();
    graph_data.push_str(&format!("{} {}\n", lattice.size(), lattice.open_passages_count()));

    for (src, dst, _) in lattice.iter_open_passages() {
        let index_a = lattice.coordinate_to_index(src).ok_or("Passage with a chamber outside the lattice")?;
        let index_b = lattice.coordinate_to_index(dst).ok_or("Passage with a chamber outside the lattice")?;
        graph_data.push_str(&format!("{} {}\n", index_a + 1, index_b + 1));
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
