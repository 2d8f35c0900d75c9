use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Parameters of one oligopoly configuration.
///
/// Field names double as the registered parameter names, so a [`Params`]
/// dictionary deserializes straight into `Settings`. Missing fields take
/// their defaults and unknown names are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Hide opponents' prices; players see only points and who undercut.
    pub imp_info: bool,
    /// Present winner identities relative to the observing player.
    pub egocentric: bool,
    pub num_options: usize,
    pub interval_size: f64,
    pub marginal_cost: Utility,
    pub horizontal_differentiation: f64,
    pub outside_good: Utility,
    pub num_turns: usize,
    pub players: usize,
    pub returns_type: Returns,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            imp_info: false,
            egocentric: false,
            num_options: DEFAULT_NUM_OPTIONS,
            interval_size: DEFAULT_INTERVAL_SIZE,
            marginal_cost: DEFAULT_MARGINAL_COST,
            horizontal_differentiation: DEFAULT_HORIZONTAL_DIFFERENTIATION,
            outside_good: DEFAULT_OUTSIDE_GOOD,
            num_turns: DEFAULT_NUM_TURNS,
            players: DEFAULT_PLAYERS,
            returns_type: Returns::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.num_options <= 1 {
            anyhow::bail!("num_options must exceed 1, got {}", self.num_options);
        }
        if self.num_turns == 0 {
            anyhow::bail!("num_turns must be positive");
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            anyhow::bail!(
                "players must be in [{}, {}], got {}",
                MIN_PLAYERS,
                MAX_PLAYERS,
                self.players
            );
        }
        if !(self.horizontal_differentiation > 0. && self.horizontal_differentiation <= 1.) {
            anyhow::bail!(
                "horizontal_differentiation must be in (0, 1], got {}",
                self.horizontal_differentiation
            );
        }
        if !self.interval_size.is_finite() || self.interval_size < 0. {
            anyhow::bail!("interval_size must be finite and non-negative");
        }
        if !self.marginal_cost.is_finite() || !self.outside_good.is_finite() {
            anyhow::bail!("marginal_cost and outside_good must be finite");
        }
        Ok(())
    }
    /// Price grid for these settings.
    pub fn grid(&self) -> Grid {
        Grid::new(self.interval_size, self.num_options)
    }
    /// Demand model for these settings.
    pub fn logit(&self) -> Logit {
        Logit::symmetric(
            self.players,
            self.horizontal_differentiation,
            self.outside_good,
            self.marginal_cost,
        )
    }
    /// Settings as a parameter dictionary.
    pub fn params(&self) -> Params {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => unreachable!("settings serialize to an object"),
        }
    }
}

impl TryFrom<&Params> for Settings {
    type Error = anyhow::Error;
    fn try_from(params: &Params) -> Result<Self, Self::Error> {
        let settings = serde_json::from_value::<Self>(serde_json::Value::Object(params.clone()))
            .map_err(|e| anyhow::anyhow!("invalid {} parameters: {}", GAME_NAME, e))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> Params {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn empty_params_are_defaults() {
        assert_eq!(Settings::try_from(&Params::new()).unwrap(), Settings::default());
    }

    #[test]
    fn overrides() {
        let settings = Settings::try_from(&params(json!({
            "players": 3,
            "imp_info": true,
            "marginal_cost": 1,
            "returns_type": "win_loss",
        })))
        .unwrap();
        assert_eq!(settings.players, 3);
        assert!(settings.imp_info);
        assert_eq!(settings.marginal_cost, 1.);
        assert_eq!(settings.returns_type, Returns::WinLoss);
    }

    #[test]
    fn unknown_returns_type() {
        let err = Settings::try_from(&params(json!({ "returns_type": "best_of_three" })));
        assert!(err.is_err());
    }

    #[test]
    fn unknown_parameter() {
        assert!(Settings::try_from(&params(json!({ "num_cards": 13 }))).is_err());
    }

    #[test]
    fn single_option_rejected() {
        assert!(Settings::try_from(&params(json!({ "num_options": 1 }))).is_err());
    }

    #[test]
    fn bounds_rejected() {
        assert!(Settings::try_from(&params(json!({ "players": 1 }))).is_err());
        assert!(Settings::try_from(&params(json!({ "players": 11 }))).is_err());
        assert!(Settings::try_from(&params(json!({ "num_turns": 0 }))).is_err());
        assert!(Settings::try_from(&params(json!({ "horizontal_differentiation": 0. }))).is_err());
        assert!(Settings::try_from(&params(json!({ "horizontal_differentiation": 1.5 }))).is_err());
    }

    #[test]
    fn params_round_trip() {
        let settings = Settings {
            players: 4,
            egocentric: true,
            ..Settings::default()
        };
        assert_eq!(Settings::try_from(&settings.params()).unwrap(), settings);
    }
}
