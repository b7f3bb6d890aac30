use super::GeneratedMaze;
use crate::engine::{Command, Direction};
use crate::maze::Position;
use rand::prelude::*;

fn lines<I: IntoIterator<Item = Command>>(commands: I) -> String {
    commands
        .into_iter()
        .map(|command| format!("{}\n", command))
        .collect()
}

impl GeneratedMaze {
    /// The winning moves, one direction word per line.
    pub fn winning_input(&self) -> String {
        lines(self.winning_moves.iter().map(|&direction| direction.into()))
    }

    /// A command sequence that wanders about without reaching the goal and
    /// then quits.
    ///
    /// It opens by stepping away from the solution, follows with a random
    /// walk no longer than the solution, and ends with `quit`. Steps of the
    /// walk that would land on the goal are left out.
    pub fn losing_moves<G: Rng>(&self, rng: &mut G) -> Vec<Command> {
        let mut commands = Vec::new();
        let mut player = self.start();

        if let Some(&first) = self.winning_moves.first() {
            let away = first.opposite();
            player = self.step(player, away).unwrap_or(player);
            commands.push(away.into());
        }

        let wander = rng
            .gen_range(0, self.winning_moves.len().max(1))
            .saturating_sub(2);

        for _ in 0..wander {
            let direction = *Direction::all().choose(rng).unwrap_or(&Direction::Up);

            match self.step(player, direction) {
                Some(next) if next == self.goal() => continue,
                Some(next) => player = next,
                None => {}
            }

            commands.push(direction.into());
        }

        commands.push(Command::Quit);
        commands
    }

    pub fn losing_input<G: Rng>(&self, rng: &mut G) -> String {
        lines(self.losing_moves(rng))
    }

    /// Where a move from `position` lands, if the move is legal.
    fn step(&self, position: Position, direction: Direction) -> Option<Position> {
        let (row, col) = direction.step_from(position);

        self.dimensions()
            .position(row, col)
            .filter(|&next| !self.blocked().is_set(next))
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{Command, Direction};
    use crate::generation::{generate_maze, GeneratedMaze, GeneratorConfig};
    use crate::maze::Dimensions;
    use insta::assert_display_snapshot;
    use quickcheck_macros::quickcheck;
    use rand::prelude::*;

    fn corridor() -> GeneratedMaze {
        let mut rng = StdRng::seed_from_u64(11);
        let config = GeneratorConfig {
            dimensions: Dimensions::new(1, 2),
            ..GeneratorConfig::default()
        };

        generate_maze(&mut rng, config).unwrap()
    }

    #[test]
    fn winning_input_is_one_word_per_line() {
        let mut maze = corridor();
        maze.winning_moves = vec![Direction::Up, Direction::Right, Direction::Right];

        assert_display_snapshot!(maze.winning_input().replace('\n', ";"), @"up;right;right;");
    }

    #[test]
    fn short_solutions_lose_by_backing_off() {
        let maze = corridor();
        let mut rng = StdRng::seed_from_u64(0);

        let first = maze.winning_moves[0];
        assert_eq!(
            maze.losing_moves(&mut rng),
            vec![Command::Move(first.opposite()), Command::Quit]
        );
    }

    #[quickcheck]
    fn losing_moves_never_touch_the_goal(maze: GeneratedMaze, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let commands = maze.losing_moves(&mut rng);

        assert_eq!(commands.last(), Some(&Command::Quit));
        assert!(commands.len() <= maze.winning_moves.len() + 1);

        let mut game = maze.start_game();
        for command in commands {
            game.apply(command);
            assert!(!game.player_at_goal());
        }
    }
}
