use crate::*;

/// Logit demand over differentiated products plus an outside good.
///
/// With horizontal differentiation `h`, outside utility `u0`, quality `v[p]`
/// and price `x[p]`, player `p` captures the share
///
/// ```text
/// s[p] = exp((v[p] - x[p]) / h) / (exp(u0 / h) + Σ_q exp((v[q] - x[q]) / h))
/// ```
///
/// and earns `(x[p] - marginal_cost) * s[p]`.
///
/// Exponents are shifted by their maximum before exponentiation and the
/// denominator is summed in sorted order, so shares stay finite for any
/// parameters and do not depend on the order of players.
#[derive(Debug, Clone, PartialEq)]
pub struct Logit {
    horizontal: f64,
    outside: Utility,
    marginal_cost: Utility,
    vertical: Vec<Utility>,
}

impl Logit {
    /// Panics unless `horizontal > 0`.
    pub fn new(
        horizontal: f64,
        outside: Utility,
        marginal_cost: Utility,
        vertical: Vec<Utility>,
    ) -> Self {
        assert!(horizontal > 0., "horizontal differentiation must be positive");
        Self {
            horizontal,
            outside,
            marginal_cost,
            vertical,
        }
    }
    /// Identical products of quality [`VERTICAL_DIFFERENTIATION`].
    pub fn symmetric(players: usize, horizontal: f64, outside: Utility, marginal_cost: Utility) -> Self {
        Self::new(
            horizontal,
            outside,
            marginal_cost,
            vec![VERTICAL_DIFFERENTIATION; players],
        )
    }
    pub fn players(&self) -> usize {
        self.vertical.len()
    }
    /// Scaled utilities: the outside good first, then one per player.
    fn exponents(&self, prices: &[Price]) -> (Utility, Vec<Utility>) {
        assert_eq!(prices.len(), self.players(), "one price per player");
        let outside = self.outside / self.horizontal;
        let inside = self
            .vertical
            .iter()
            .zip(prices)
            .map(|(v, x)| (v - x) / self.horizontal)
            .collect();
        (outside, inside)
    }
    /// Demand share of every player. Each share is in `(0, 1)` and they sum
    /// to less than one, the remainder going to the outside good.
    pub fn shares(&self, prices: &[Price]) -> Vec<Utility> {
        let (outside, inside) = self.exponents(prices);
        let shift = inside.iter().copied().fold(outside, Utility::max);
        let weights = inside
            .iter()
            .map(|u| (u - shift).exp())
            .collect::<Vec<_>>();
        let mut terms = weights.clone();
        terms.push((outside - shift).exp());
        terms.sort_by(Utility::total_cmp);
        let denominator = terms.iter().sum::<Utility>();
        debug_assert!(denominator >= 1.);
        weights.into_iter().map(|w| w / denominator).collect()
    }
    /// Profit of every player for one round at the given prices.
    pub fn profits(&self, prices: &[Price]) -> Vec<Utility> {
        self.shares(prices)
            .into_iter()
            .zip(prices)
            .map(|(share, price)| (price - self.marginal_cost) * share)
            .collect()
    }
}
