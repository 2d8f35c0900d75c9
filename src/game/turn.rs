use crate::Player;

/// Whose move it is.
///
/// # Variants
///
/// - `Simultaneous` — Every player submits an action for the same round
/// - `Choice(usize)` — A single seat, used when asking about one player
/// - `Terminal` — The game is over, compute returns
///
/// There is no chance variant: the oligopoly is deterministic.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Turn {
    Terminal,
    Simultaneous,
    Choice(Player),
}

impl Turn {
    pub fn is_simultaneous(&self) -> bool {
        matches!(self, Self::Simultaneous)
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
}

impl From<Player> for Turn {
    fn from(player: Player) -> Self {
        Self::Choice(player)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(c) => write!(f, "P{}", c),
            Self::Simultaneous => write!(f, "*"),
            Self::Terminal => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_becomes_choice() {
        assert_eq!(Turn::from(3), Turn::Choice(3));
        assert!(!Turn::from(0).is_simultaneous());
    }

    #[test]
    fn display() {
        assert_eq!(Turn::Choice(1).to_string(), "P1");
        assert_eq!(Turn::Simultaneous.to_string(), "*");
        assert_eq!(Turn::Terminal.to_string(), "-");
    }
}
