use crate::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::OnceLock;

/// Builds a game from resolved parameters.
pub type Factory = fn(&Params) -> anyhow::Result<Arc<dyn Game>>;

/// Mapping from a game's short name to its type and factory.
///
/// Registering the same name twice is an error rather than a silent
/// overwrite.
#[derive(Debug, Default)]
pub struct Registry {
    games: BTreeMap<&'static str, (GameType, Factory)>,
}

impl Registry {
    pub fn register(&mut self, kind: GameType, factory: Factory) -> anyhow::Result<()> {
        let name = kind.short_name;
        if self.games.contains_key(name) {
            anyhow::bail!("game {} is already registered", name);
        }
        log::debug!("registering game {}", name);
        self.games.insert(name, (kind, factory));
        Ok(())
    }
    pub fn names(&self) -> Vec<&'static str> {
        self.games.keys().copied().collect()
    }
    pub fn kind(&self, name: &str) -> Option<&GameType> {
        self.games.get(name).map(|(kind, _)| kind)
    }
    /// Construct a game from its name and parameters.
    pub fn load(&self, name: &str, params: &Params) -> anyhow::Result<Arc<dyn Game>> {
        let (kind, factory) = self
            .games
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("unknown game {:?}, known: {:?}", name, self.names()))?;
        factory(&kind.resolve(params)?)
    }
    /// Construct a game from a `name(key=value,...)` string.
    pub fn parse(&self, game: &str) -> anyhow::Result<Arc<dyn Game>> {
        let GameString { name, params } = GameString::try_from(game)?;
        self.load(&name, &params)
    }
}

/// The process-wide registry with every built-in game.
///
/// Populated exactly once, on first use.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = Registry::default();
        registry
            .register(Oligopoly::registration(), Oligopoly::factory)
            .expect("built-in games have unique names");
        registry
    })
}

/// Load a game from the process-wide registry by game string.
pub fn load_game(game: &str) -> anyhow::Result<Arc<dyn Game>> {
    registry().parse(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin() {
        assert_eq!(registry().names(), vec![GAME_NAME]);
        assert_eq!(registry().kind(GAME_NAME).unwrap().dynamics, Dynamics::Simultaneous);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut registry = Registry::default();
        registry
            .register(Oligopoly::registration(), Oligopoly::factory)
            .unwrap();
        assert!(registry
            .register(Oligopoly::registration(), Oligopoly::factory)
            .is_err());
    }

    #[test]
    fn load_defaults() {
        let game = load_game(GAME_NAME).unwrap();
        assert_eq!(game.num_players(), DEFAULT_PLAYERS);
        assert_eq!(game.num_distinct_actions(), DEFAULT_NUM_OPTIONS);
        assert_eq!(game.max_game_length(), DEFAULT_NUM_TURNS);
        assert_eq!(game.utility_sum(), None);
    }

    #[test]
    fn load_with_parameters() {
        let game = load_game("bertrand_oligopoly(players=4,num_turns=3,returns_type=win_loss)").unwrap();
        assert_eq!(game.num_players(), 4);
        assert_eq!(game.max_game_length(), 3);
        assert_eq!(game.utility_sum(), Some(0.));
        let mut state = game.new_initial_state();
        for _ in 0..3 {
            state.apply_actions(&[0, 1, 2, 3]);
        }
        assert!(state.is_terminal());
        assert_eq!(state.returns()[0], 1.);
    }

    #[test]
    fn game_string_round_trip() {
        let game = load_game("bertrand_oligopoly(players=3,egocentric=true)").unwrap();
        let again = load_game(&game.to_game_string()).unwrap();
        assert_eq!(again.parameters(), game.parameters());
    }

    #[test]
    fn errors() {
        assert!(load_game("goofspiel").is_err());
        assert!(load_game("bertrand_oligopoly(returns_type=best_of)").is_err());
        assert!(load_game("bertrand_oligopoly(num_options=1)").is_err());
        assert!(load_game("bertrand_oligopoly(num_cards=4)").is_err());
    }
}
