use crate::*;

/// Codec between a joint action and a single flat action index.
///
/// The flat index is a mixed-radix number in base `options` with player 0
/// as the least significant digit, so the flat space is
/// `[0, options^players)`. That space may not fit in `usize` (ten players
/// with a hundred options each); decoding still works for every index that
/// does, but the space cannot be enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Joint {
    players: usize,
    options: usize,
}

impl Joint {
    pub fn new(players: usize, options: usize) -> Self {
        assert!(options > 0, "joint actions need at least one option");
        Self { players, options }
    }
    /// Number of distinct joint actions, `None` if it overflows `usize`.
    pub fn size(&self) -> Option<usize> {
        u32::try_from(self.players)
            .ok()
            .and_then(|n| self.options.checked_pow(n))
    }
    /// Panics if the joint action has no flat index that fits in `usize`.
    pub fn encode(&self, actions: &[Action]) -> Action {
        assert_eq!(actions.len(), self.players, "one action per player");
        actions.iter().rev().fold(0, |flat, &action| {
            assert!(action < self.options, "action {} out of range", action);
            flat.checked_mul(self.options)
                .and_then(|flat| flat.checked_add(action))
                .unwrap_or_else(|| panic!("joint action {:?} overflows usize", actions))
        })
    }
    /// Panics if `flat` is outside the flat space.
    pub fn decode(&self, flat: Action) -> Vec<Action> {
        let mut rest = flat;
        let actions = (0..self.players)
            .map(|_| {
                let action = rest % self.options;
                rest /= self.options;
                action
            })
            .collect();
        assert!(rest == 0, "flat action {} out of range", flat);
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_zero_is_least_significant() {
        let joint = Joint::new(2, 5);
        assert_eq!(joint.encode(&[3, 0]), 3);
        assert_eq!(joint.encode(&[0, 1]), 5);
        assert_eq!(joint.decode(13), vec![3, 2]);
    }

    #[test]
    fn covers_flat_space() {
        let joint = Joint::new(3, 4);
        assert_eq!(joint.size(), Some(64));
        for flat in 0..64 {
            assert_eq!(joint.encode(&joint.decode(flat)), flat);
        }
    }

    #[test]
    #[should_panic]
    fn decode_out_of_range() {
        Joint::new(2, 3).decode(9);
    }

    #[test]
    fn oversized_space_still_decodes() {
        let joint = Joint::new(10, 100);
        assert_eq!(joint.size(), None);
        assert_eq!(joint.decode(0), vec![0; 10]);
        let mut actions = vec![0; 10];
        actions[9] = 18;
        actions[0] = 7;
        let flat = joint.encode(&actions);
        assert_eq!(joint.decode(flat), actions);
        assert_eq!(joint.decode(usize::MAX).len(), 10);
    }
}
