use crate::*;

/// Renders a [`Market`] for one requesting player.
///
/// # Tensor blocks
///
/// - `point_totals [players]` — if public; seat order starts at the requester
/// - `win_sequence [num_turns, players]` — if public with imperfect
///   information; one-hot undercutter per round, relative to the requester
///   when egocentric, all-zero on ties
/// - `player_action_sequence [num_turns, num_options]` — if imperfect
///   information with recall of a single player's private view; one-hot own
///   price level per round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observer {
    visibility: Visibility,
    egocentric: bool,
}

impl Observer {
    pub fn new(visibility: Visibility, egocentric: bool) -> Self {
        Self {
            visibility,
            egocentric,
        }
    }
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
    pub fn egocentric(&self) -> bool {
        self.egocentric
    }
}

/// Tensor view.
impl Observer {
    pub fn tensor(&self, market: &Market, player: Player) -> Observation {
        let player = market.seat(player);
        let imperfect = market.settings().imp_info;
        let Visibility { public, recall, .. } = self.visibility;
        let mut observation = Observation::default();
        if public {
            self.point_totals(market, player, &mut observation);
        }
        if imperfect && public {
            self.win_sequence(market, player, &mut observation);
        }
        if imperfect && recall && self.visibility.is_single() {
            self.action_sequence(market, player, &mut observation);
        }
        observation
    }
    fn point_totals(&self, market: &Market, player: Player, observation: &mut Observation) {
        let n = market.n();
        let block = observation.alloc("point_totals", vec![n]);
        for i in 0..n {
            block.set(&[i], market.points()[(player + i) % n] as Feature);
        }
    }
    fn win_sequence(&self, market: &Market, player: Player, observation: &mut Observation) {
        let n = market.n();
        let block = observation.alloc("win_sequence", vec![market.settings().num_turns, n]);
        for (round, win) in market.wins().iter().enumerate() {
            if let Some(winner) = win {
                let column = match self.egocentric {
                    true => (n + winner - player) % n,
                    false => *winner,
                };
                block.set(&[round, column], 1.);
            }
        }
    }
    fn action_sequence(&self, market: &Market, player: Player, observation: &mut Observation) {
        let settings = market.settings();
        let block = observation.alloc(
            "player_action_sequence",
            vec![settings.num_turns, settings.num_options],
        );
        for (round, action) in market.actions_of(player).into_iter().enumerate() {
            block.set(&[round, action], 1.);
        }
    }
}

/// String view.
impl Observer {
    pub fn string(&self, market: &Market, player: Player) -> String {
        let player = market.seat(player);
        let imperfect = market.settings().imp_info;
        let single = self.visibility.is_single();
        let mut out = String::new();
        if imperfect && single && self.visibility.recall {
            Self::string_actions(market, player, &mut out);
            Self::string_wins(market, &mut out);
            Self::string_points(market, &mut out);
            Self::string_terminal(market, &mut out);
        } else if imperfect && single {
            Self::string_points(market, &mut out);
            Self::string_wins(market, &mut out);
        } else if self.visibility.public {
            Self::string_wins(market, &mut out);
            Self::string_points(market, &mut out);
        }
        out
    }
    fn string_actions(market: &Market, player: Player, out: &mut String) {
        out.push_str(&format!("P{} action sequence: ", player));
        for action in market.actions_of(player) {
            out.push_str(&format!("{} ", action));
        }
        out.push('\n');
    }
    fn string_wins(market: &Market, out: &mut String) {
        out.push_str("Win sequence: ");
        for win in market.wins() {
            match win {
                Some(p) => out.push_str(&format!("{} ", p)),
                None => out.push_str("- "),
            }
        }
        out.push('\n');
    }
    fn string_points(market: &Market, out: &mut String) {
        out.push_str("Points: ");
        for points in market.points() {
            out.push_str(&format!("{} ", points));
        }
        out.push('\n');
    }
    fn string_terminal(market: &Market, out: &mut String) {
        out.push_str(&format!("Terminal?: {}\n", market.is_terminal()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(imp_info: bool, egocentric: bool, rounds: &[[Action; 2]]) -> Market {
        let mut market = Market::new(&Settings {
            imp_info,
            egocentric,
            num_options: 5,
            num_turns: 4,
            ..Settings::default()
        });
        for joint in rounds {
            market.apply_actions(joint);
        }
        market
    }

    #[test]
    fn perfect_information_exposes_points_only() {
        let market = market(false, false, &[[0, 4], [2, 2]]);
        let observer = Observer::new(Visibility::information_state(), false);
        let observation = observer.tensor(&market, 0);
        assert_eq!(observation.blocks().len(), 1);
        assert_eq!(observation.len(), 2);
        let string = observer.string(&market, 0);
        assert!(string.starts_with("Win sequence: 0 - \n"));
        assert!(string.contains("Points: "));
    }

    #[test]
    fn point_totals_start_at_requester() {
        let market = market(false, false, &[[0, 4]]);
        let totals = Observer::new(Visibility::public(), false).tensor(&market, 1);
        let totals = totals.get("point_totals").unwrap();
        assert_eq!(totals.at(&[0]), market.points()[1] as Feature);
        assert_eq!(totals.at(&[1]), market.points()[0] as Feature);
    }

    #[test]
    fn information_state_blocks() {
        let market = market(true, false, &[[0, 4], [2, 2], [3, 1]]);
        let observation = Observer::new(Visibility::information_state(), false).tensor(&market, 0);
        let names = observation.blocks().iter().map(Block::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["point_totals", "win_sequence", "player_action_sequence"]);
        let wins = observation.get("win_sequence").unwrap();
        assert_eq!(wins.shape(), &[4, 2]);
        assert_eq!(wins.data(), &[1., 0., 0., 0., 0., 1., 0., 0.]);
        let actions = observation.get("player_action_sequence").unwrap();
        assert_eq!(actions.shape(), &[4, 5]);
        assert_eq!(actions.at(&[0, 0]), 1.);
        assert_eq!(actions.at(&[1, 2]), 1.);
        assert_eq!(actions.at(&[2, 3]), 1.);
        assert_eq!(actions.data().iter().sum::<Feature>(), 3.);
        assert_eq!(observation.len(), 2 + 8 + 20);
    }

    #[test]
    fn egocentric_rotates_winner() {
        let market = market(true, true, &[[0, 4], [3, 1]]);
        let observer = Observer::new(Visibility::public(), true);
        let wins = observer.tensor(&market, 1);
        let wins = wins.get("win_sequence").unwrap();
        assert_eq!(wins.at(&[0, 1]), 1.);
        assert_eq!(wins.at(&[1, 0]), 1.);
    }

    #[test]
    fn observation_has_no_recall() {
        let market = market(true, false, &[[1, 2]]);
        let observer = Observer::new(Visibility::observation(), false);
        assert!(observer.tensor(&market, 0).get("player_action_sequence").is_none());
        let string = observer.string(&market, 0);
        assert!(string.starts_with("Points: "));
        assert!(string.ends_with("Win sequence: 0 \n"));
    }

    #[test]
    fn information_state_string_order() {
        let market = market(true, false, &[[1, 2], [3, 3]]);
        let string = Observer::new(Visibility::information_state(), false).string(&market, 1);
        let lines = string.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "P1 action sequence: 2 3 ");
        assert_eq!(lines[1], "Win sequence: 0 - ");
        assert!(lines[2].starts_with("Points: "));
        assert_eq!(lines[3], "Terminal?: false");
    }

    #[test]
    fn private_only_is_empty() {
        let market = market(false, false, &[[1, 2]]);
        let observer = Observer::new(Visibility::private(), false);
        assert!(observer.string(&market, 0).is_empty());
        assert!(observer.tensor(&market, 0).is_empty());
    }

    #[test]
    fn all_privacy_takes_public_branch() {
        let market = market(true, false, &[[0, 4], [2, 2]]);
        let all = Observer::new(
            Visibility {
                public: true,
                recall: true,
                private: Privacy::All,
            },
            false,
        );
        let public = Observer::new(Visibility::public(), false);
        assert_eq!(all.string(&market, 0), public.string(&market, 0));
        assert!(all.string(&market, 0).starts_with("Win sequence: 0 - \n"));
        let observation = all.tensor(&market, 0);
        assert!(observation.get("player_action_sequence").is_none());
        assert_eq!(observation, public.tensor(&market, 0));
    }

    #[test]
    fn rendering_is_pure() {
        let market = market(true, true, &[[1, 2], [0, 0]]);
        let before = market.clone();
        let observer = Observer::new(Visibility::information_state(), true);
        assert_eq!(observer.tensor(&market, 0), observer.tensor(&market, 0));
        assert_eq!(observer.string(&market, 1), observer.string(&market, 1));
        assert_eq!(market, before);
    }

    #[test]
    #[should_panic]
    fn requester_out_of_range() {
        let market = market(false, false, &[]);
        Observer::new(Visibility::public(), false).string(&market, 2);
    }
}
