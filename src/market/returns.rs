use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;

/// How accumulated points become terminal returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Returns {
    /// Winners split +1, losers split -1, a full draw is all zeros.
    WinLoss,
    /// Points minus the mean, so returns sum to zero.
    PointDifference,
    /// Raw accumulated points.
    TotalPoints,
}

impl Returns {
    /// Terminal returns from final points and the set of top scorers.
    pub fn settle(&self, points: &[Utility], winners: &BTreeSet<Player>) -> Vec<Utility> {
        let n = points.len();
        match self {
            Self::WinLoss if winners.len() == n => vec![0.; n],
            Self::WinLoss => {
                let win = 1. / winners.len() as Utility;
                let lose = -1. / (n - winners.len()) as Utility;
                (0..n)
                    .map(|p| match winners.contains(&p) {
                        true => win,
                        false => lose,
                    })
                    .collect()
            }
            Self::PointDifference => {
                let mean = points.iter().sum::<Utility>() / n as Utility;
                points.iter().map(|p| p - mean).collect()
            }
            Self::TotalPoints => points.to_vec(),
        }
    }
    /// Whether returns always sum to zero.
    pub fn is_zero_sum(&self) -> bool {
        !matches!(self, Self::TotalPoints)
    }
}

impl Default for Returns {
    fn default() -> Self {
        Self::TotalPoints
    }
}

impl std::str::FromStr for Returns {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win_loss" => Ok(Self::WinLoss),
            "point_difference" => Ok(Self::PointDifference),
            "total_points" => Ok(Self::TotalPoints),
            other => Err(anyhow::anyhow!("unrecognized returns_type: {}", other)),
        }
    }
}

impl std::fmt::Display for Returns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WinLoss => write!(f, "win_loss"),
            Self::PointDifference => write!(f, "point_difference"),
            Self::TotalPoints => write!(f, "total_points"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winners(seats: &[Player]) -> BTreeSet<Player> {
        seats.iter().copied().collect()
    }

    #[test]
    fn win_loss_splits() {
        let returns = Returns::WinLoss.settle(&[3., 3., 1., 0.], &winners(&[0, 1]));
        assert_eq!(returns, vec![0.5, 0.5, -0.5, -0.5]);
    }

    #[test]
    fn win_loss_single_winner() {
        let returns = Returns::WinLoss.settle(&[1., 4., 2.], &winners(&[1]));
        assert_eq!(returns, vec![-0.5, 1., -0.5]);
        assert_eq!(returns.iter().sum::<Utility>(), 0.);
    }

    #[test]
    fn win_loss_full_draw() {
        let returns = Returns::WinLoss.settle(&[2., 2.], &winners(&[0, 1]));
        assert_eq!(returns, vec![0., 0.]);
    }

    #[test]
    fn point_difference_centers() {
        let returns = Returns::PointDifference.settle(&[1., 2., 6.], &winners(&[2]));
        assert_eq!(returns, vec![-2., -1., 3.]);
    }

    #[test]
    fn total_points_passes_through() {
        let points = [0.25, 0.75];
        assert_eq!(Returns::TotalPoints.settle(&points, &winners(&[1])), points.to_vec());
    }

    #[test]
    fn parse() {
        for returns in [Returns::WinLoss, Returns::PointDifference, Returns::TotalPoints] {
            assert_eq!(returns.to_string().parse::<Returns>().unwrap(), returns);
        }
        assert!("winner_takes_all".parse::<Returns>().is_err());
    }
}
