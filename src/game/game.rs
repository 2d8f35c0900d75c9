use crate::*;

/// Immutable descriptor shared by every state of one configuration.
///
/// # Required Methods
///
/// - `kind()` — Static facts, adjusted for this configuration
/// - `parameters()` — Fully resolved parameters
/// - `new_initial_state()` — A fresh state at round zero
/// - bounds and shapes used by learning code to size its buffers
pub trait Game: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> GameType;
    fn parameters(&self) -> Params;
    fn num_players(&self) -> usize;
    /// Size of each player's individual action space.
    fn num_distinct_actions(&self) -> usize;
    fn max_chance_outcomes(&self) -> usize;
    /// Maximum number of joint moves before the game ends.
    fn max_game_length(&self) -> usize;
    fn min_utility(&self) -> Utility;
    fn max_utility(&self) -> Utility;
    /// Fixed sum of returns, if the game guarantees one.
    fn utility_sum(&self) -> Option<Utility>;
    /// Declared shape, `[players * num_options]`. Rendered tensors take their
    /// length from the exposed blocks instead.
    fn information_state_tensor_shape(&self) -> Vec<usize>;
    fn observation_tensor_shape(&self) -> Vec<usize>;
    fn new_initial_state(&self) -> Box<dyn State>;

    /// The game in `name(key=value,...)` form.
    fn to_game_string(&self) -> String {
        GameString {
            name: self.kind().short_name.to_string(),
            params: self.parameters(),
        }
        .to_string()
    }
}
