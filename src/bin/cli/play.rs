use maze_game::{MazeGame, MazeResult};
use std::io;
use std::path::Path;

pub fn run(file: &Path) -> MazeResult<()> {
    let mut game = MazeGame::load(file)?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    game.play(stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
