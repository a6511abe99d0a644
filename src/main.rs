use anyhow::Context;
use mazebmp::{app, config::Config};

fn main() -> anyhow::Result<()> {
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .init();

    let config = match Config::from_args(std::env::args().skip(1))? {
        Some(config) => config,
        None => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            match Config::prompt(&mut input, &mut output)? {
                Some(config) => config,
                None => {
                    eprintln!("Input ended before the maze was described.");
                    return Ok(());
                }
            }
        }
    };

    let report = app::run(&config, |progress| println!("{}", progress))
        .context("failed to produce maze images")?;

    println!("Maze written to {}", report.maze_path.display());
    if let (Some(path), Some(length)) = (report.solution_path, report.solution_length) {
        println!("Solution ({} cells) written to {}", length, path.display());
    }
    Ok(())
}
