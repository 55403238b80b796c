//! Command surface for a single game.
//!
//! `GameSession` owns the live `GameState` together with the input-side state
//! the rules gate on: the selected square, a supernova waiting for
//! confirmation and the undo/redo history. Every command either succeeds or
//! returns a `ChessError` with the session left exactly as it was.

use tracing::{debug, info};

use crate::chess_errors::{ChessError, ChessResult};
use crate::fields::explosion::{explosion_footprint, explosion_is_valid};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::{GameState, GameStatus};
use crate::game_state::history::History;
use crate::move_generation::legal_move_apply::{
    apply_explosion, apply_promotion, apply_step, apply_teleport, refresh_status,
};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::move_generation::move_generator::{LegalMove, TeleportRoute};
use crate::session::commands::{ExplosionReport, MoveOutcome, SelectionOutcome, TurnPhase};

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    selected: Option<Square>,
    pending_explosion: Option<Square>,
    history: History,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_state(GameState::new_game())
    }

    /// Session over an arbitrary position. The status is re-derived from the
    /// board; history starts empty.
    pub fn from_state(mut state: GameState) -> Self {
        refresh_status(&mut state);
        Self {
            state,
            selected: None,
            pending_explosion: None,
            history: History::new(),
        }
    }

    /// Starts a fresh game and forgets all history.
    pub fn setup_game(&mut self) -> &GameState {
        self.state = GameState::new_game();
        self.selected = None;
        self.pending_explosion = None;
        self.history.clear();
        info!("new game set up");
        &self.state
    }

    /// Legal moves of whatever piece stands on `from`.
    pub fn legal_moves(&self, from: Square) -> Vec<LegalMove> {
        legal_moves_from(&self.state, from)
    }

    pub fn attempt_move(&mut self, from: Square, to: Square) -> ChessResult<MoveOutcome> {
        let result = self.try_move(from, to);
        log_rejection("attempt_move", result)
    }

    pub fn attempt_teleport(&mut self, from: Square, wormhole: Square, exit: Square) -> ChessResult<MoveOutcome> {
        let result = self.try_teleport(from, wormhole, exit);
        log_rejection("attempt_teleport", result)
    }

    /// One click on the board. With nothing selected, selects an own piece.
    /// With a piece selected: clicking it again deselects, clicking another
    /// own piece reselects (unless it is a wormhole the selection can enter),
    /// clicking a legal destination or teleport exit plays it, and anything
    /// else deselects.
    pub fn select_square(&mut self, square: Square) -> ChessResult<SelectionOutcome> {
        let result = self.try_select(square);
        log_rejection("select_square", result)
    }

    /// Whether the side to move may detonate the supernova on `square` now.
    pub fn can_explode(&self, square: Square) -> bool {
        self.ensure_accepting_commands().is_ok()
            && self
                .own_piece(square)
                .is_ok_and(|piece| piece.kind == PieceKind::Supernova)
            && explosion_is_valid(&self.state.board, square)
    }

    /// Marks the supernova on `square` as pending and returns the squares its
    /// explosion would clear.
    pub fn request_explosion(&mut self, square: Square) -> ChessResult<Vec<Square>> {
        let result = self.try_request_explosion(square);
        log_rejection("request_explosion", result)
    }

    pub fn confirm_explosion(&mut self) -> ChessResult<ExplosionReport> {
        let result = self.try_confirm_explosion();
        log_rejection("confirm_explosion", result)
    }

    /// Drops the pending explosion without touching the board.
    pub fn cancel_explosion(&mut self) -> ChessResult<()> {
        let center = self.pending_explosion.take().ok_or(ChessError::NoPendingExplosion);
        let center = log_rejection("cancel_explosion", center)?;
        debug!(%center, "explosion cancelled");
        Ok(())
    }

    /// Replaces the pending pawn. Kinds that are not offered become a queen.
    pub fn choose_promotion(&mut self, kind: PieceKind) -> ChessResult<PieceKind> {
        let result = self.try_choose_promotion(kind);
        log_rejection("choose_promotion", result)
    }

    pub fn undo(&mut self) -> ChessResult<()> {
        let previous = self.history.undo(self.state).ok_or(ChessError::NothingToUndo);
        self.state = log_rejection("undo", previous)?;
        self.clear_input();
        debug!(side_to_move = %self.state.side_to_move, "undo");
        Ok(())
    }

    pub fn redo(&mut self) -> ChessResult<()> {
        let next = self.history.redo(self.state).ok_or(ChessError::NothingToRedo);
        self.state = log_rejection("redo", next)?;
        self.clear_input();
        debug!(side_to_move = %self.state.side_to_move, "redo");
        Ok(())
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.state.winner()
    }

    pub fn in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.state.board, color)
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.state.en_passant_square
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.state.pending_promotion
    }

    #[inline]
    pub fn pending_explosion(&self) -> Option<Square> {
        self.pending_explosion
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn phase(&self) -> TurnPhase {
        if self.state.is_over() {
            TurnPhase::GameOver
        } else if let Some(square) = self.state.pending_promotion {
            TurnPhase::AwaitingPromotionChoice(square)
        } else if let Some(square) = self.pending_explosion {
            TurnPhase::AwaitingExplosionConfirm(square)
        } else if let Some(square) = self.selected {
            TurnPhase::PieceSelected(square)
        } else {
            TurnPhase::AwaitingSelection
        }
    }

    fn try_move(&mut self, from: Square, to: Square) -> ChessResult<MoveOutcome> {
        self.ensure_accepting_commands()?;
        ensure_on_board(to)?;
        self.own_piece(from)?;

        let moves = self.legal_moves(from);
        if moves.contains(&LegalMove::Step { from, to }) {
            return Ok(self.play_step(from, to));
        }
        if moves
            .iter()
            .any(|mv| mv.is_teleport() && mv.destination() == to)
        {
            return Err(ChessError::WormholeNeedsExit { entry: to });
        }
        Err(ChessError::IllegalMove { from, to })
    }

    fn try_teleport(&mut self, from: Square, entry: Square, exit: Square) -> ChessResult<MoveOutcome> {
        self.ensure_accepting_commands()?;
        ensure_on_board(entry)?;
        ensure_on_board(exit)?;
        self.own_piece(from)?;

        let route = self
            .legal_moves(from)
            .into_iter()
            .find_map(|mv| match mv {
                LegalMove::Teleport(route) if route.entry == entry && route.exit == exit => Some(route),
                _ => None,
            })
            .ok_or(ChessError::IllegalTeleport { from, entry, exit })?;

        Ok(self.play_teleport(&route))
    }

    fn try_select(&mut self, square: Square) -> ChessResult<SelectionOutcome> {
        self.ensure_accepting_commands()?;
        ensure_on_board(square)?;

        let Some(selected) = self.selected else {
            self.own_piece(square)?;
            self.selected = Some(square);
            return Ok(SelectionOutcome::Selected(square));
        };

        if square == selected {
            self.selected = None;
            return Ok(SelectionOutcome::Deselected);
        }

        let moves = self.legal_moves(selected);
        if let Ok(piece) = self.own_piece(square) {
            let is_entry = piece.kind == PieceKind::Wormhole
                && moves
                    .iter()
                    .any(|mv| mv.is_teleport() && mv.destination() == square);
            let now = if is_entry { selected } else { square };
            self.selected = Some(now);
            return Ok(SelectionOutcome::Selected(now));
        }

        if moves.contains(&LegalMove::Step { from: selected, to: square }) {
            return Ok(SelectionOutcome::Moved(self.play_step(selected, square)));
        }

        let route = moves.into_iter().find_map(|mv| match mv {
            LegalMove::Teleport(route) if route.exit == square => Some(route),
            _ => None,
        });
        if let Some(route) = route {
            return Ok(SelectionOutcome::Moved(self.play_teleport(&route)));
        }

        self.selected = None;
        Ok(SelectionOutcome::Deselected)
    }

    fn try_request_explosion(&mut self, square: Square) -> ChessResult<Vec<Square>> {
        self.ensure_accepting_commands()?;
        let piece = self.own_piece(square)?;
        if piece.kind != PieceKind::Supernova || !explosion_is_valid(&self.state.board, square) {
            return Err(ChessError::CannotExplode { square });
        }

        self.selected = None;
        self.pending_explosion = Some(square);
        debug!(%square, "explosion requested");
        Ok(explosion_footprint(square))
    }

    fn try_confirm_explosion(&mut self) -> ChessResult<ExplosionReport> {
        if self.state.is_over() {
            return Err(ChessError::GameOver);
        }
        let center = self.pending_explosion.ok_or(ChessError::NoPendingExplosion)?;
        if !explosion_is_valid(&self.state.board, center) {
            return Err(ChessError::CannotExplode { square: center });
        }

        self.history.record(self.state);
        let destroyed = apply_explosion(&mut self.state, center);
        self.pending_explosion = None;
        debug!(%center, destroyed = destroyed.len(), "explosion applied");
        self.log_game_over();

        Ok(ExplosionReport { center, destroyed })
    }

    fn try_choose_promotion(&mut self, kind: PieceKind) -> ChessResult<PieceKind> {
        if self.state.is_over() {
            return Err(ChessError::GameOver);
        }
        let square = self.state.pending_promotion.ok_or(ChessError::NoPendingPromotion)?;
        let placed = apply_promotion(&mut self.state, kind).ok_or(ChessError::NoPendingPromotion)?;

        debug!(%square, piece = placed.name(), "promotion applied");
        self.log_game_over();
        Ok(placed)
    }

    fn play_step(&mut self, from: Square, to: Square) -> MoveOutcome {
        self.history.record(self.state);
        apply_step(&mut self.state, from, to);
        self.selected = None;
        debug!(%from, %to, "move applied");
        self.finish_play()
    }

    fn play_teleport(&mut self, route: &TeleportRoute) -> MoveOutcome {
        self.history.record(self.state);
        apply_teleport(&mut self.state, route);
        self.selected = None;
        debug!(from = %route.from, entry = %route.entry, exit = %route.exit, "teleport applied");
        self.finish_play()
    }

    fn finish_play(&self) -> MoveOutcome {
        self.log_game_over();
        if self.state.pending_promotion.is_some() {
            MoveOutcome::AppliedPendingPromotion
        } else {
            MoveOutcome::Applied
        }
    }

    fn log_game_over(&self) {
        if let GameStatus::Over { winner, reason } = self.state.status {
            info!(%winner, ?reason, "game over");
        }
    }

    fn clear_input(&mut self) {
        self.selected = None;
        self.pending_explosion = None;
    }

    fn ensure_accepting_commands(&self) -> ChessResult<()> {
        if self.state.is_over() {
            return Err(ChessError::GameOver);
        }
        if let Some(square) = self.state.pending_promotion {
            return Err(ChessError::PromotionPending { square });
        }
        if self.pending_explosion.is_some() {
            return Err(ChessError::ExplosionPending);
        }
        Ok(())
    }

    fn own_piece(&self, square: Square) -> ChessResult<Piece> {
        ensure_on_board(square)?;
        let piece = self
            .state
            .board
            .get(square)
            .ok_or(ChessError::EmptySquare { square })?;
        if piece.color != self.state.side_to_move {
            return Err(ChessError::NotSideToMove {
                square,
                side_to_move: self.state.side_to_move,
            });
        }
        Ok(piece)
    }
}

fn ensure_on_board(square: Square) -> ChessResult<()> {
    if square.is_on_board() {
        Ok(())
    } else {
        Err(ChessError::OffBoard { square })
    }
}

fn log_rejection<T>(command: &'static str, result: ChessResult<T>) -> ChessResult<T> {
    if let Err(err) = &result {
        debug!(command, %err, "command rejected");
    }
    result
}
