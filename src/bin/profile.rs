use std::time::Instant;

use kruskal_maze::{
    generators::get_rng,
    maze::Maze,
    solvers::{SearchMode, search},
};

/// Headless generate-and-solve loop: `profile [iterations] [width] [height]`
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);
    let width = args.next().and_then(|s| s.parse::<u8>().ok()).unwrap_or(u8::MAX);
    let height = args.next().and_then(|s| s.parse::<u8>().ok()).unwrap_or(u8::MAX);

    let mut rng = get_rng(None);
    for i in 0..num_iters {
        let start = Instant::now();
        let maze = Maze::generate(width, height, &mut rng)?;
        let generated = start.elapsed();

        for mode in [SearchMode::BreadthFirst, SearchMode::DepthFirst] {
            let start = Instant::now();
            let result = search(&maze, mode)?;
            tracing::info!(
                "iteration {}: {} in {:?} ({} explored, path {})",
                i,
                mode,
                start.elapsed(),
                result.explored.len(),
                result.path.len()
            );
        }
        tracing::info!(
            "iteration {}: generated {}x{} maze in {:?}",
            i,
            width,
            height,
            generated
        );
    }
    Ok(())
}
