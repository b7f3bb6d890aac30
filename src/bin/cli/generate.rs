use maze_game::generation::{generate_maze, GeneratedMaze, GeneratorConfig};
use maze_game::MazeResult;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;

fn build(seed: Option<u64>, config: GeneratorConfig) -> MazeResult<GeneratedMaze> {
    match seed {
        Some(seed) => generate_maze(&mut SmallRng::seed_from_u64(seed), config),
        None => generate_maze(&mut rand::thread_rng(), config),
    }
}

pub fn run(
    out: &Path,
    seed: Option<u64>,
    solution: Option<&Path>,
    config: GeneratorConfig,
) -> MazeResult<()> {
    let maze = build(seed, config)?;

    maze.write_to(out)?;
    println!("Generated {}", out.display());

    if let Some(solution) = solution {
        fs::write(solution, maze.winning_input())?;
        println!("Wrote {} winning moves to {}", maze.winning_moves.len(), solution.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_game::MazeGame;

    #[test]
    fn seeded_runs_are_reproducible() {
        let config = GeneratorConfig::default();

        assert_eq!(build(Some(42), config).unwrap(), build(Some(42), config).unwrap());
    }

    #[test]
    fn writes_maze_and_solution() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("maze.txt");
        let solution = dir.path().join("moves.txt");

        run(&out, Some(5), Some(&solution), GeneratorConfig::default()).unwrap();

        let mut game = MazeGame::load(&out).unwrap();
        let moves = fs::read_to_string(&solution).unwrap();

        let outcome = game
            .play(moves.as_bytes(), &mut std::io::sink())
            .unwrap();
        assert_eq!(outcome, maze_game::Outcome::Won);
    }
}
