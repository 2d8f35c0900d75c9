use crate::*;
use std::sync::Arc;

/// Immutable descriptor of one oligopoly configuration.
///
/// Holds validated [`Settings`] and the derived price grid. Every
/// [`Market`] it creates carries its own copy of both.
#[derive(Debug, Clone, PartialEq)]
pub struct Oligopoly {
    settings: Settings,
    grid: Grid,
}

impl Oligopoly {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        settings.validate()?;
        let grid = settings.grid();
        log::debug!(
            "{} with {} players, {} price levels in [{:.4}, {:.4}], {} rounds",
            GAME_NAME,
            settings.players,
            settings.num_options,
            grid.low(),
            grid.high(),
            settings.num_turns
        );
        Ok(Self { settings, grid })
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    /// A fresh state with its concrete type.
    pub fn market(&self) -> Market {
        Market::new(&self.settings)
    }
    /// Observer for any visibility policy.
    ///
    /// `egocentric` overrides the configured flag when given.
    pub fn observer(&self, visibility: Visibility, egocentric: Option<bool>) -> Observer {
        Observer::new(visibility, egocentric.unwrap_or(self.settings.egocentric))
    }
    /// Facts about the game as registered, before any parameters apply.
    pub fn registration() -> GameType {
        GameType {
            short_name: GAME_NAME,
            long_name: "Bertrand Oligopoly",
            dynamics: Dynamics::Simultaneous,
            chance: Chance::Deterministic,
            information: Information::Perfect,
            sum: Sum::General,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            defaults: Settings::default().params(),
        }
    }
    /// Registry entry point.
    pub fn factory(params: &Params) -> anyhow::Result<Arc<dyn Game>> {
        Ok(Arc::new(Self::try_from(params)?))
    }
}

impl Default for Oligopoly {
    fn default() -> Self {
        Self::new(Settings::default()).expect("default settings are valid")
    }
}

impl TryFrom<&Params> for Oligopoly {
    type Error = anyhow::Error;
    fn try_from(params: &Params) -> Result<Self, Self::Error> {
        Self::new(Settings::try_from(params)?)
    }
}

impl Game for Oligopoly {
    fn kind(&self) -> GameType {
        GameType {
            information: match self.settings.imp_info {
                true => Information::Imperfect,
                false => Information::Perfect,
            },
            sum: match self.settings.returns_type.is_zero_sum() {
                true => Sum::Zero,
                false => Sum::General,
            },
            ..Self::registration()
        }
    }
    fn parameters(&self) -> Params {
        self.settings.params()
    }
    fn num_players(&self) -> usize {
        self.settings.players
    }
    fn num_distinct_actions(&self) -> usize {
        self.settings.num_options
    }
    fn max_chance_outcomes(&self) -> usize {
        0
    }
    fn max_game_length(&self) -> usize {
        self.settings.num_turns
    }
    fn min_utility(&self) -> Utility {
        let turns = self.settings.num_turns as Utility;
        match self.settings.returns_type {
            Returns::WinLoss => -1.,
            Returns::PointDifference => -self.max_utility(),
            Returns::TotalPoints => ((self.grid.low() - self.settings.marginal_cost) * turns).min(0.),
        }
    }
    fn max_utility(&self) -> Utility {
        let turns = self.settings.num_turns as Utility;
        match self.settings.returns_type {
            Returns::WinLoss => 1.,
            Returns::PointDifference | Returns::TotalPoints => {
                (MONOPOLY_PRICE - self.settings.marginal_cost) * turns
            }
        }
    }
    fn utility_sum(&self) -> Option<Utility> {
        match self.settings.returns_type.is_zero_sum() {
            true => Some(0.),
            false => None,
        }
    }
    /// Declared flat size. The information-state layout itself is described
    /// by the blocks of [`Observer::tensor`].
    fn information_state_tensor_shape(&self) -> Vec<usize> {
        vec![self.settings.players * self.settings.num_options]
    }
    fn observation_tensor_shape(&self) -> Vec<usize> {
        vec![self.settings.players * self.settings.num_options]
    }
    fn new_initial_state(&self) -> Box<dyn State> {
        Box::new(self.market())
    }
}
