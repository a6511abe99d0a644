use std::{
    fmt,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    error::{MazeError, Result},
    generators::{generate_maze, get_rng},
    image::{to_pixels, write_bmp},
    maze::{Cell, Maze},
    solvers::solve_maze,
};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The unsolved maze image.
    pub maze_path: PathBuf,
    /// The solved maze image, when a solution was requested.
    pub solution_path: Option<PathBuf>,
    /// Number of cells on the solution route, including both boundary holes.
    pub solution_length: Option<usize>,
}

/// A stage of [`run`], reported to the caller as it starts or finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    Generating,
    Solving,
    Creating(&'a Path),
    Done,
}

impl fmt::Display for Progress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Generating => write!(f, "generating..."),
            Progress::Solving => write!(f, "solving..."),
            Progress::Creating(path) => write!(f, "creating \"{}\" as image...", path.display()),
            Progress::Done => write!(f, "Done!"),
        }
    }
}

/// Generates a maze, writes it, and optionally solves a copy and writes that as well.
/// Each stage is reported through `progress` as it starts, and each written image once done.
pub fn run(config: &Config, mut progress: impl FnMut(Progress<'_>)) -> Result<Report> {
    let mut rng = get_rng(config.seed);

    progress(Progress::Generating);
    let maze = generate_maze(config.width.into(), config.height.into(), &mut rng)?;
    progress(Progress::Creating(&config.output));
    render(&maze, &config.output)?;
    progress(Progress::Done);

    let mut report = Report {
        maze_path: config.output.clone(),
        solution_path: None,
        solution_length: None,
    };

    if config.solve {
        progress(Progress::Solving);
        let solved = solve_maze(&maze, &mut rng)?;
        let solved_path = config.solved_output();
        progress(Progress::Creating(&solved_path));
        render(&solved, &solved_path)?;
        progress(Progress::Done);
        report.solution_length = Some(solved.count(Cell::Solution));
        report.solution_path = Some(solved_path);
    }

    Ok(report)
}

/// Maps `maze` to pixels and writes it as a BMP file at `path`.
pub fn render(maze: &Maze, path: &Path) -> Result<()> {
    let pixels = to_pixels(maze)?;
    tracing::info!("[render] writing {}", path.display());

    let sink_error = |source| MazeError::SinkWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(sink_error)?;
    let mut writer = BufWriter::new(file);
    write_bmp(&pixels, maze.width(), maze.height(), &mut writer).map_err(sink_error)?;
    Ok(())
}
