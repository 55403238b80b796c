//! Leaf counting over the legal move tree.
//!
//! Every legal step and teleport is a node; a step that reaches the far rank
//! fans out into one node per promotion choice. Explosions are not moves and
//! are not counted.

use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::{GameOverReason, GameState, GameStatus};
use crate::move_generation::legal_move_apply::{apply_promotion, apply_step, apply_teleport};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::LegalMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub teleports: usize,
    pub en_passant: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.teleports += rhs.teleports;
        self.en_passant += rhs.en_passant;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct MoveFlags {
    capture: bool,
    teleport: bool,
    en_passant: bool,
    promotion: bool,
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (child, flags) in successors(game_state) {
        perft_recurse(&child, flags, depth, 1, &mut total);
    }
    total
}

/// Counts per root move, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(LegalMove, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }

    generate_legal_moves(game_state)
        .into_iter()
        .map(|mv| {
            let mut counts = PerftCounts::default();
            for (child, flags) in play(game_state, &mv) {
                perft_recurse(&child, flags, depth, 1, &mut counts);
            }
            (mv, counts)
        })
        .collect()
}

fn perft_recurse(
    game_state: &GameState,
    flags: MoveFlags,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.merge(leaf_counts(game_state, flags));
        return;
    }
    if game_state.is_over() {
        return;
    }

    for (child, child_flags) in successors(game_state) {
        perft_recurse(&child, child_flags, search_depth, current_depth + 1, counts);
    }
}

fn leaf_counts(game_state: &GameState, flags: MoveFlags) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    counts.captures += usize::from(flags.capture);
    counts.teleports += usize::from(flags.teleport);
    counts.en_passant += usize::from(flags.en_passant);
    counts.promotions += usize::from(flags.promotion);

    match game_state.status {
        GameStatus::Check => counts.checks += 1,
        GameStatus::Over {
            reason: GameOverReason::Checkmate,
            ..
        } => {
            counts.checks += 1;
            counts.checkmates += 1;
        }
        _ => {}
    }
    counts
}

fn successors(game_state: &GameState) -> Vec<(GameState, MoveFlags)> {
    generate_legal_moves(game_state)
        .iter()
        .flat_map(|mv| play(game_state, mv))
        .collect()
}

fn play(game_state: &GameState, mv: &LegalMove) -> Vec<(GameState, MoveFlags)> {
    let board = &game_state.board;
    let mut next = *game_state;
    let mut flags = MoveFlags::default();

    match mv {
        LegalMove::Step { from, to } => {
            let is_pawn = board
                .get(*from)
                .is_some_and(|piece| piece.kind == PieceKind::Pawn);
            flags.en_passant = is_pawn && board.is_empty(*to) && game_state.en_passant_square == Some(*to);
            flags.capture = !board.is_empty(*to) || flags.en_passant;
            apply_step(&mut next, *from, *to);
        }
        LegalMove::Teleport(route) => {
            flags.teleport = true;
            flags.capture = !board.is_empty(route.exit);
            apply_teleport(&mut next, route);
        }
    }

    if next.pending_promotion.is_none() {
        return vec![(next, flags)];
    }

    flags.promotion = true;
    PROMOTION_CHOICES
        .iter()
        .map(|&kind| {
            let mut promoted = next;
            apply_promotion(&mut promoted, kind);
            (promoted, flags)
        })
        .collect()
}
