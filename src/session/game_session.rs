//! Human-vs-engine application state.
//!
//! Selection, highlight targets and engine turns live in one `GameSession`
//! driven by discrete events, so a front-end (terminal or graphical) only
//! translates input into `SessionEvent`s and renders the returned
//! `SessionUpdate`s. The board itself stays a plain value.

use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SquareClicked(Square),
    EngineTurn,
    Restart,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    /// A human piece is selected; `targets` are its legal destinations.
    Selected { square: Square, targets: Vec<Square> },
    SelectionCleared,
    Moved { mv: Move, outcome: Option<Winner> },
    IllegalMove(Move),
    EngineMoved {
        mv: Move,
        outcome: Option<Winner>,
        info_lines: Vec<String>,
    },
    /// The engine found no legal move; the terminal state has been refreshed.
    EngineHasNoMove { outcome: Option<Winner> },
    NotHumanTurn,
    NotEngineTurn,
    GameAlreadyOver(Option<Winner>),
    Restarted,
}

pub struct GameSession {
    board: Board,
    initial: Board,
    human: Color,
    engine: Box<dyn Engine>,
    selected: Option<Square>,
    targets: Vec<Square>,
}

impl GameSession {
    pub fn new(human: Color, engine: Box<dyn Engine>) -> Self {
        Self::from_board(Board::new(), human, engine)
    }

    /// Start from an arbitrary position; `Restart` returns to it.
    pub fn from_board(board: Board, human: Color, engine: Box<dyn Engine>) -> Self {
        Self {
            initial: board.clone(),
            board,
            human,
            engine,
            selected: None,
            targets: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn human_color(&self) -> Color {
        self.human
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn targets(&self) -> &[Square] {
        &self.targets
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn is_engine_turn(&self) -> bool {
        !self.board.is_game_over() && self.board.side_to_move() != self.human
    }

    pub fn handle_event(&mut self, event: SessionEvent) -> Result<SessionUpdate, EngineError> {
        match event {
            SessionEvent::SquareClicked(square) => Ok(self.on_square_clicked(square)),
            SessionEvent::EngineTurn => self.on_engine_turn(),
            SessionEvent::Restart => Ok(self.restart()),
        }
    }

    fn on_square_clicked(&mut self, square: Square) -> SessionUpdate {
        if self.board.is_game_over() {
            return SessionUpdate::GameAlreadyOver(self.board.winner());
        }
        if self.board.side_to_move() != self.human {
            return SessionUpdate::NotHumanTurn;
        }

        let Some(from) = self.selected else {
            return self.select(square);
        };

        if square == from {
            self.clear_selection();
            return SessionUpdate::SelectionCleared;
        }

        let mv = Move::new(from, square);
        if self.board.attempt_move(from, square) {
            self.clear_selection();
            info!(%mv, "human move");
            return SessionUpdate::Moved {
                mv,
                outcome: self.board.winner(),
            };
        }

        // Clicking another friendly piece switches the selection.
        if Board::color_of(self.board.piece_at(square)) == Some(self.human) {
            return self.select(square);
        }

        self.clear_selection();
        SessionUpdate::IllegalMove(mv)
    }

    fn select(&mut self, square: Square) -> SessionUpdate {
        if Board::color_of(self.board.piece_at(square)) != Some(self.human) {
            self.clear_selection();
            return SessionUpdate::SelectionCleared;
        }
        self.selected = Some(square);
        self.targets = self
            .board
            .legal_moves_from(square)
            .into_iter()
            .map(|mv| mv.to)
            .collect();
        SessionUpdate::Selected {
            square,
            targets: self.targets.clone(),
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.targets.clear();
    }

    fn on_engine_turn(&mut self) -> Result<SessionUpdate, EngineError> {
        if self.board.is_game_over() {
            return Ok(SessionUpdate::GameAlreadyOver(self.board.winner()));
        }
        if self.board.side_to_move() == self.human {
            return Ok(SessionUpdate::NotEngineTurn);
        }

        let out = self.engine.choose_move(&self.board)?;
        let Some(mv) = out.best_move else {
            self.board.refresh_terminal_state();
            debug!(winner = ?self.board.winner(), "engine has no legal move");
            return Ok(SessionUpdate::EngineHasNoMove {
                outcome: self.board.winner(),
            });
        };

        if !self.board.attempt_move(mv.from, mv.to) {
            return Err(EngineError::IllegalMove(mv));
        }
        info!(%mv, engine = self.engine.name(), "engine move");
        Ok(SessionUpdate::EngineMoved {
            mv,
            outcome: self.board.winner(),
            info_lines: out.info_lines,
        })
    }

    fn restart(&mut self) -> SessionUpdate {
        self.board = self.initial.clone();
        self.clear_selection();
        self.engine.new_game();
        SessionUpdate::Restarted
    }
}

#[cfg(test)]
mod tests {
    use super::{GameSession, SessionEvent, SessionUpdate};
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_trait::{Engine, EngineOutput};
    use crate::errors::EngineError;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::utils::layout::parse_layout;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col)
    }

    fn click(row: i32, col: i32) -> SessionEvent {
        SessionEvent::SquareClicked(sq(row, col))
    }

    fn session() -> GameSession {
        GameSession::new(Color::White, Box::new(MinimaxEngine::new(1)))
    }

    struct BogusEngine;

    impl Engine for BogusEngine {
        fn name(&self) -> &str {
            "bogus"
        }

        fn choose_move(&mut self, _board: &Board) -> Result<EngineOutput, EngineError> {
            Ok(EngineOutput {
                best_move: Some(Move::new(sq(3, 3), sq(4, 4))),
                info_lines: Vec::new(),
            })
        }
    }

    #[test]
    fn selecting_own_piece_lists_targets() {
        let mut s = session();
        let update = s.handle_event(click(5, 0)).expect("no engine involved");
        assert_eq!(
            update,
            SessionUpdate::Selected {
                square: sq(5, 0),
                targets: vec![sq(4, 0)],
            }
        );
        assert_eq!(s.selected(), Some(sq(5, 0)));
    }

    #[test]
    fn clicking_empty_or_enemy_square_clears_selection() {
        let mut s = session();
        assert_eq!(s.handle_event(click(3, 3)).unwrap(), SessionUpdate::SelectionCleared);
        assert_eq!(s.handle_event(click(1, 3)).unwrap(), SessionUpdate::SelectionCleared);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn select_then_move_flips_turn() {
        let mut s = session();
        s.handle_event(click(5, 3)).unwrap();
        let update = s.handle_event(click(4, 3)).unwrap();
        assert_eq!(
            update,
            SessionUpdate::Moved {
                mv: Move::new(sq(5, 3), sq(4, 3)),
                outcome: None,
            }
        );
        assert_eq!(s.board().side_to_move(), Color::Black);
        assert!(s.targets().is_empty());
        assert!(s.is_engine_turn());
    }

    #[test]
    fn illegal_destination_is_rejected() {
        let mut s = session();
        s.handle_event(click(5, 3)).unwrap();
        let update = s.handle_event(click(2, 3)).unwrap();
        assert_eq!(update, SessionUpdate::IllegalMove(Move::new(sq(5, 3), sq(2, 3))));
        assert_eq!(s.selected(), None);
        assert_eq!(s.board(), &Board::new());
    }

    #[test]
    fn clicking_other_friendly_piece_reselects() {
        let mut s = session();
        s.handle_event(click(5, 3)).unwrap();
        let update = s.handle_event(click(5, 4)).unwrap();
        assert!(matches!(update, SessionUpdate::Selected { square, .. } if square == sq(5, 4)));
    }

    #[test]
    fn engine_replies_after_human_move() {
        let mut s = session();
        assert_eq!(s.handle_event(SessionEvent::EngineTurn).unwrap(), SessionUpdate::NotEngineTurn);

        s.handle_event(click(5, 3)).unwrap();
        s.handle_event(click(4, 3)).unwrap();
        assert_eq!(s.handle_event(click(5, 4)).unwrap(), SessionUpdate::NotHumanTurn);

        let update = s.handle_event(SessionEvent::EngineTurn).unwrap();
        assert!(matches!(update, SessionUpdate::EngineMoved { outcome: None, .. }));
        assert_eq!(s.board().side_to_move(), Color::White);
    }

    #[test]
    fn engine_without_moves_marks_game_over() {
        let board = parse_layout("3k3/7/2Q2K1/7/7/7/7 b").expect("layout should parse");
        let mut s = GameSession::from_board(board, Color::White, Box::new(MinimaxEngine::new(1)));
        let update = s.handle_event(SessionEvent::EngineTurn).unwrap();
        assert_eq!(
            update,
            SessionUpdate::EngineHasNoMove {
                outcome: Some(Winner::Draw),
            }
        );
        assert_eq!(
            s.handle_event(click(2, 2)).unwrap(),
            SessionUpdate::GameAlreadyOver(Some(Winner::Draw))
        );
    }

    #[test]
    fn illegal_engine_move_is_an_error() {
        let mut s = GameSession::new(Color::Black, Box::new(BogusEngine));
        let err = s.handle_event(SessionEvent::EngineTurn).unwrap_err();
        assert_eq!(err, EngineError::IllegalMove(Move::new(sq(3, 3), sq(4, 4))));
        assert_eq!(s.board(), &Board::new());
    }

    #[test]
    fn restart_restores_initial_position() {
        let mut s = session();
        s.handle_event(click(5, 3)).unwrap();
        s.handle_event(click(4, 3)).unwrap();
        s.handle_event(SessionEvent::EngineTurn).unwrap();
        assert_eq!(s.handle_event(SessionEvent::Restart).unwrap(), SessionUpdate::Restarted);
        assert_eq!(s.board(), &Board::new());
        assert_eq!(s.selected(), None);
    }
}
