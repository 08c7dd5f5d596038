//! Board state: the 7×7 grid, side to move, and terminal-state flags.
//!
//! `Board` is a plain value. Cloning copies a flat fixed-size array, so search
//! branches and speculative check tests can each own a private copy without
//! aliasing the caller's grid.

use tracing::{debug, trace, warn};

use crate::game_state::chess_types::*;
use crate::game_state::geometry::BOARD_SIZE;
use crate::move_generation::attack_detection::is_in_check;
use crate::move_generation::legal_move_generator::{
    legal_moves_for, legal_moves_for_side_to_move,
};

const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [Option<Piece>; SQUARE_COUNT],
    side_to_move: Color,
    game_over: bool,
    winner: Option<Winner>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position with White to move.
    pub fn new() -> Self {
        let mut board = Self::empty(Color::White);
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as i32;
            board.set_piece(Square::new(0, col), Some(Piece::new(*kind, Color::Black)));
            board.set_piece(Square::new(1, col), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            board.set_piece(Square::new(5, col), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set_piece(Square::new(6, col), Some(Piece::new(*kind, Color::White)));
        }
        board
    }

    /// A board with no pieces. Used to hand-build positions.
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            grid: [None; SQUARE_COUNT],
            side_to_move,
            game_over: false,
            winner: None,
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.index()]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[square.index()] = piece;
    }

    #[inline]
    pub fn color_of(piece: Option<Piece>) -> Option<Color> {
        piece.map(|p| p.color)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid
            .iter()
            .enumerate()
            .filter_map(|(idx, piece)| piece.map(|p| (Square::from_index(idx), p)))
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
    }

    pub fn count_pieces(&self, kind: PieceKind) -> usize {
        self.pieces().filter(|(_, piece)| piece.kind == kind).count()
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves_for_side_to_move(self)
    }

    /// Legal moves of the piece on `square`, empty unless it belongs to the side to move.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        legal_moves_for(self, square)
    }

    /// Validate and play a move for the side to move.
    ///
    /// Returns `false` and leaves the board untouched when the origin is empty,
    /// belongs to the other side, the move is not in the legal set, or the game
    /// has already ended.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> bool {
        if self.game_over {
            trace!(%from, %to, "move rejected: game is over");
            return false;
        }

        let Some(piece) = self.piece_at(from) else {
            trace!(%from, %to, "move rejected: empty origin");
            return false;
        };
        if piece.color != self.side_to_move {
            trace!(%from, %to, "move rejected: not the side to move");
            return false;
        }

        let requested = Move::new(from, to);
        if !legal_moves_for(self, from).contains(&requested) {
            trace!(%from, %to, "move rejected: not legal");
            return false;
        }

        self.apply_move_unchecked(requested);
        debug!(mv = %requested, side_to_move = %self.side_to_move, "move played");
        self.refresh_terminal_state();
        true
    }

    /// Play a move without validation: move the piece, promote, flip the side.
    ///
    /// Callers must only pass moves taken from the legal-move set of this board.
    pub fn apply_move_unchecked(&mut self, mv: Move) {
        self.move_piece_on_grid(mv);

        if let Some(piece) = self.piece_at(mv.to) {
            if piece.kind == PieceKind::Pawn && mv.to.row() == piece.color.promotion_row() {
                self.set_piece(mv.to, Some(Piece::new(PieceKind::Queen, piece.color)));
            }
        }

        self.side_to_move = self.side_to_move.opposite();
    }

    /// Raw grid write of a move. No promotion and no side flip.
    #[inline]
    pub(crate) fn move_piece_on_grid(&mut self, mv: Move) {
        let piece = self.piece_at(mv.from);
        self.set_piece(mv.to, piece);
        self.set_piece(mv.from, None);
    }

    /// Recompute `game_over` and `winner` for the side now to move.
    pub fn refresh_terminal_state(&mut self) {
        let legal_move_count = legal_moves_for_side_to_move(self).len();
        if let Some(outcome) = self.terminal_outcome(legal_move_count) {
            self.game_over = true;
            self.winner = Some(outcome);
            debug!(winner = %outcome, "game over");
        }
    }

    /// Terminal outcome given the side to move's legal move count.
    ///
    /// Checkmate and stalemate are decided first; a missing King overrides
    /// either, with a missing Black King taking precedence.
    pub(crate) fn terminal_outcome(&self, legal_move_count: usize) -> Option<Winner> {
        let mut outcome = None;

        if legal_move_count == 0 {
            let mover = self.side_to_move;
            outcome = if is_in_check(self, mover) {
                Some(Winner::from(mover.opposite()))
            } else {
                Some(Winner::Draw)
            };
        }

        if self.find_king(Color::White).is_none() {
            warn!("white king missing from the board");
            outcome = Some(Winner::Black);
        }
        if self.find_king(Color::Black).is_none() {
            warn!("black king missing from the board");
            outcome = Some(Winner::White);
        }

        outcome
    }
}
