use crate::*;

/// Evenly spaced price levels.
///
/// The interval is anchored on [`NASH_PRICE`] and [`MONOPOLY_PRICE`] and
/// widened on both sides by `interval_size` times their spread:
///
/// ```text
/// low  = nash     - interval_size * (monopoly - nash)
/// high = monopoly + interval_size * (monopoly - nash)
/// ```
///
/// Action `0` is `low`, action `options - 1` is `high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    low: Price,
    high: Price,
    options: usize,
}

impl Grid {
    /// Panics unless `options > 1`, which keeps the step strictly positive.
    pub fn new(interval_size: f64, options: usize) -> Self {
        assert!(options > 1, "a price grid needs at least two options");
        let spread = MONOPOLY_PRICE - NASH_PRICE;
        Self {
            low: NASH_PRICE - interval_size * spread,
            high: MONOPOLY_PRICE + interval_size * spread,
            options,
        }
    }
    pub fn low(&self) -> Price {
        self.low
    }
    pub fn high(&self) -> Price {
        self.high
    }
    pub fn options(&self) -> usize {
        self.options
    }
    /// Distance between adjacent price levels.
    pub fn step(&self) -> Price {
        (self.high - self.low) / (self.options - 1) as Price
    }
    /// Price of a level, `low + action * step`.
    ///
    /// Interpolated so both endpoints are hit exactly.
    pub fn price(&self, action: Action) -> Price {
        assert!(action < self.options, "price level {} out of range", action);
        let t = action as Price / (self.options - 1) as Price;
        self.low * (1. - t) + self.high * t
    }
    pub fn prices(&self, actions: &[Action]) -> Vec<Price> {
        actions.iter().map(|&a| self.price(a)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for options in [2, 3, 5, 15, 101] {
            let grid = Grid::new(0.1, options);
            assert_eq!(grid.price(0), grid.low());
            assert_eq!(grid.price(options - 1), grid.high());
        }
    }

    #[test]
    fn default_interval() {
        let grid = Grid::new(DEFAULT_INTERVAL_SIZE, DEFAULT_NUM_OPTIONS);
        let spread = MONOPOLY_PRICE - NASH_PRICE;
        assert!((grid.low() - (NASH_PRICE - 0.1 * spread)).abs() < 1e-12);
        assert!((grid.high() - (MONOPOLY_PRICE + 0.1 * spread)).abs() < 1e-12);
        assert!(grid.step() > 0.);
    }

    #[test]
    fn levels_are_evenly_spaced() {
        let grid = Grid::new(0.3, 7);
        for action in 0..7 {
            let linear = grid.low() + action as Price * grid.step();
            assert!((grid.price(action) - linear).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_interval_spans_anchors() {
        let grid = Grid::new(0., 2);
        assert_eq!(grid.price(0), NASH_PRICE);
        assert_eq!(grid.price(1), MONOPOLY_PRICE);
    }

    #[test]
    #[should_panic]
    fn single_option() {
        Grid::new(0.1, 1);
    }

    #[test]
    #[should_panic]
    fn level_out_of_range() {
        Grid::new(0.1, 5).price(5);
    }
}
