use super::*;

/// How players take turns. Only simultaneous play is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dynamics {
    Simultaneous,
}

/// Whether the game has chance events. No registered game has any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chance {
    Deterministic,
}

/// Whether every player sees the full state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Information {
    Perfect,
    Imperfect,
}

/// Constraint on the sum of terminal returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sum {
    Zero,
    General,
}

/// Static description of a game as registered.
///
/// Some facts depend on parameters (imperfect information, general-sum
/// scoring), so a constructed game reports its own [`GameType`] through
/// [`Game::kind`], which may differ from the registered one.
#[derive(Debug, Clone, PartialEq)]
pub struct GameType {
    pub short_name: &'static str,
    pub long_name: &'static str,
    pub dynamics: Dynamics,
    pub chance: Chance,
    pub information: Information,
    pub sum: Sum,
    pub min_players: usize,
    pub max_players: usize,
    /// Parameter schema: every accepted name with its default value.
    pub defaults: Params,
}

impl GameType {
    /// Default parameters overridden by the given ones.
    ///
    /// Fails on any name outside the schema.
    pub fn resolve(&self, params: &Params) -> anyhow::Result<Params> {
        let mut resolved = self.defaults.clone();
        for (key, value) in params {
            match resolved.get_mut(key) {
                Some(slot) => *slot = value.clone(),
                None => anyhow::bail!("unknown parameter {:?} for {}", key, self.short_name),
            }
        }
        Ok(resolved)
    }
}
