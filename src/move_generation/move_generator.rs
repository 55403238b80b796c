//! Legal move records handed to callers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Direction, Square};

/// Exit resolved for a piece entering a friendly wormhole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TeleportRoute {
    pub from: Square,
    /// Wormhole the piece slides into.
    pub entry: Square,
    /// Wormhole the piece comes out of.
    pub exit_wormhole: Square,
    /// Square the piece lands on.
    pub exit: Square,
    /// Heading kept through the network, from `from` toward `entry`.
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LegalMove {
    Step { from: Square, to: Square },
    Teleport(TeleportRoute),
}

impl LegalMove {
    #[inline]
    pub fn from(&self) -> Square {
        match self {
            LegalMove::Step { from, .. } => *from,
            LegalMove::Teleport(route) => route.from,
        }
    }

    /// Square the player points at: the target of a step, or the entry
    /// wormhole of a teleport.
    #[inline]
    pub fn destination(&self) -> Square {
        match self {
            LegalMove::Step { to, .. } => *to,
            LegalMove::Teleport(route) => route.entry,
        }
    }

    /// Square the piece ends up on.
    #[inline]
    pub fn landing(&self) -> Square {
        match self {
            LegalMove::Step { to, .. } => *to,
            LegalMove::Teleport(route) => route.exit,
        }
    }

    #[inline]
    pub fn is_teleport(&self) -> bool {
        matches!(self, LegalMove::Teleport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{LegalMove, TeleportRoute};
    use crate::game_state::chess_types::Square;

    #[test]
    fn teleport_destination_is_the_entry_wormhole() {
        let route = TeleportRoute {
            from: Square::new(3, 2),
            entry: Square::new(3, 3),
            exit_wormhole: Square::new(3, 9),
            exit: Square::new(3, 10),
            direction: (0, 1),
        };
        let mv = LegalMove::Teleport(route);
        assert_eq!(mv.from(), Square::new(3, 2));
        assert_eq!(mv.destination(), Square::new(3, 3));
        assert_eq!(mv.landing(), Square::new(3, 10));
        assert!(mv.is_teleport());

        let step = LegalMove::Step {
            from: Square::new(10, 0),
            to: Square::new(9, 0),
        };
        assert_eq!(step.destination(), step.landing());
    }
}
