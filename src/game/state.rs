use crate::*;

/// One trajectory through a simultaneous-move game.
///
/// States are owned by their driver and mutated in place. Independent
/// trajectories are obtained through [`State::clone_box`], which never shares
/// storage with the original.
///
/// Player-indexed entry points panic on an index outside `[0, players)`.
pub trait State: Send + Sync + std::fmt::Debug + std::fmt::Display {
    fn current_player(&self) -> Turn;
    /// Individual actions for `Choice(p)`, flat joint actions for
    /// `Simultaneous`, nothing once terminal.
    ///
    /// Panics on `Simultaneous` when the flat joint space does not fit in
    /// `usize`; `apply_action` and `action_to_string` still accept any flat
    /// index that does.
    fn legal_actions(&self, turn: Turn) -> Vec<Action>;
    /// Apply one action per player.
    fn apply_actions(&mut self, actions: &[Action]);
    /// Apply a flat joint action, see [`Joint`].
    fn apply_action(&mut self, flat: Action);
    fn is_terminal(&self) -> bool;
    /// Terminal utility per player, zeros before the end.
    fn returns(&self) -> Vec<Utility>;
    fn action_to_string(&self, turn: Turn, action: Action) -> String;
    /// Every individual action applied so far, round by round.
    fn history(&self) -> Vec<Action>;
    fn information_state_string(&self, player: Player) -> String;
    /// Every exposed block, flattened in order. The length follows the blocks
    /// actually exposed, not [`Game::information_state_tensor_shape`].
    fn information_state_tensor(&self, player: Player) -> Vec<Feature>;
    fn observation_string(&self, player: Player) -> String;
    /// Same layout rule as [`State::information_state_tensor`]; do not size
    /// buffers from [`Game::observation_tensor_shape`].
    fn observation_tensor(&self, player: Player) -> Vec<Feature>;
    fn clone_box(&self) -> Box<dyn State>;

    fn is_simultaneous(&self) -> bool {
        self.current_player().is_simultaneous()
    }
}

impl Clone for Box<dyn State> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
