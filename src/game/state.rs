use super::{detector, Board, Player, PlayerId, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(PlayerId),
    Won(PlayerId),
    Draw,
}

impl GameStatus {
    /// Check if the game is over
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }
}

/// A single game: board, players, turn and round bookkeeping.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    turn: PlayerId,
    winner: Option<PlayerId>,
    round: usize,
    round_max: usize,
}

impl Game {
    /// Create a game for the two players, already started.
    ///
    /// Panics if the players do not occupy seats One and Two in that order.
    pub fn new(players: [Player; 2]) -> Self {
        assert!(
            players[0].id() == PlayerId::One && players[1].id() == PlayerId::Two,
            "players must be given in seat order"
        );
        let mut game = Game {
            board: Board::new(),
            players,
            turn: PlayerId::One,
            winner: None,
            round: 1,
            round_max: COLS * ROWS,
        };
        game.start();
        game
    }

    /// Reset to round 1 with player one to move on an empty board
    pub fn start(&mut self) {
        self.board = Board::new();
        self.turn = PlayerId::One;
        self.winner = None;
        self.round = 1;
        self.round_max = COLS * ROWS;
        tracing::debug!(round_max = self.round_max, "game started");
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Player whose move it is
    pub fn current_player(&self) -> &Player {
        self.player(self.turn)
    }

    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn round_max(&self) -> usize {
        self.round_max
    }

    /// Drop the current player's piece into `col` (0-indexed).
    /// Returns the row where it landed.
    ///
    /// The column must have room; see [`Board::play`].
    pub fn play(&mut self, col: usize) -> usize {
        debug_assert!(self.winner.is_none(), "move played after the game was won");
        let row = self.board.play(col, self.turn);
        tracing::debug!(round = self.round, player = ?self.turn, col, row, "piece dropped");
        row
    }

    /// Hand the move to the other player and count the round.
    /// Runs after every applied move, the winning one included.
    pub fn change_turn(&mut self) {
        self.turn = self.turn.other();
        self.round += 1;
    }

    /// Scan for four-in-a-row, recording the first owner found.
    /// A winner, once recorded, is never replaced.
    pub fn check_winner(&mut self) -> bool {
        if self.winner.is_none() {
            self.winner = detector::find_four(&self.board);
        }
        self.winner.is_some()
    }

    /// All rounds used up with nobody winning
    pub fn is_draw(&self) -> bool {
        self.winner.is_none() && self.round > self.round_max
    }

    /// Run the win scan, then the draw check, and report where the game stands.
    pub fn evaluate(&mut self) -> GameStatus {
        self.check_winner();
        self.status()
    }

    /// Current state without rescanning the board
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None if self.is_draw() => GameStatus::Draw,
            None => GameStatus::AwaitingMove(self.turn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn new_game() -> Game {
        Game::new([
            Player::new(PlayerId::One, "Player 1", "🔵"),
            Player::new(PlayerId::Two, "Player 2", "🔴"),
        ])
    }

    fn apply(game: &mut Game, col: usize) -> GameStatus {
        game.play(col);
        game.change_turn();
        game.evaluate()
    }

    #[test]
    fn test_initial_state() {
        let mut game = new_game();
        assert_eq!(game.turn(), PlayerId::One);
        assert_eq!(game.round(), 1);
        assert_eq!(game.round_max(), 42);
        assert_eq!(game.winner(), None);
        assert_eq!(game.evaluate(), GameStatus::AwaitingMove(PlayerId::One));
    }

    #[test]
    fn test_apply_move() {
        let mut game = new_game();
        let status = apply(&mut game, 3);

        assert_eq!(status, GameStatus::AwaitingMove(PlayerId::Two));
        assert_eq!(game.round(), 2);
        assert_eq!(game.current_player().name(), "Player 2");
        assert_eq!(game.board().get(3, 0), Cell::Taken(PlayerId::One));
    }

    #[test]
    fn test_round_counts_moves() {
        let mut game = new_game();
        for (n, col) in [0, 1, 2, 3, 4, 5, 6, 0, 1].into_iter().enumerate() {
            apply(&mut game, col);
            assert_eq!(game.round(), n + 2);
        }
    }

    #[test]
    fn test_win_detection() {
        let mut game = new_game();
        // One builds the bottom row, Two stacks on top of it
        for col in 0..3 {
            apply(&mut game, col);
            apply(&mut game, col);
        }
        let status = apply(&mut game, 3);

        assert_eq!(status, GameStatus::Won(PlayerId::One));
        assert!(status.is_terminal());
        // The winning move still advances the round
        assert_eq!(game.round(), 8);
    }

    #[test]
    fn test_winner_is_never_replaced() {
        let mut game = new_game();
        for col in 0..3 {
            apply(&mut game, col);
            apply(&mut game, col);
        }
        apply(&mut game, 3);
        assert_eq!(game.winner(), Some(PlayerId::One));

        game.check_winner();
        assert_eq!(game.winner(), Some(PlayerId::One));
        assert!(!game.is_draw());
    }

    #[test]
    fn test_start_resets() {
        let mut game = new_game();
        apply(&mut game, 2);
        apply(&mut game, 2);
        game.start();

        assert_eq!(game.round(), 1);
        assert_eq!(game.turn(), PlayerId::One);
        assert_eq!(game.board().column_fill(2), 0);
    }
}
