use crate::*;
use std::collections::BTreeSet;

/// One trajectory of the repeated price game.
///
/// `Market` owns everything it needs: a copy of the settings and its own
/// price grid and demand model, built from the same inputs as the
/// descriptor's. Cloning deep-copies every history.
///
/// # Fields
///
/// - `round` — Rounds played, `0..=num_turns`
/// - `points` — Profit accumulated per player
/// - `profits` — Profit per player in the last round (display only)
/// - `wins` — Per round, the unique lowest-priced player or `None` on a tie
/// - `history` — Every joint action, round by round
/// - `winners` — Top scorers, filled once at the terminal transition
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    settings: Settings,
    grid: Grid,
    logit: Logit,
    turn: Turn,
    round: usize,
    points: Vec<Utility>,
    profits: Vec<Utility>,
    wins: Vec<Option<Player>>,
    history: Vec<Vec<Action>>,
    winners: BTreeSet<Player>,
}

impl Market {
    /// Fresh state at round zero. Settings are expected to be validated.
    pub fn new(settings: &Settings) -> Self {
        let n = settings.players;
        Self {
            grid: settings.grid(),
            logit: settings.logit(),
            settings: settings.clone(),
            turn: Turn::Simultaneous,
            round: 0,
            points: vec![0.; n],
            profits: vec![0.; n],
            wins: Vec::new(),
            history: Vec::new(),
            winners: BTreeSet::new(),
        }
    }
}

/// Accessors.
impl Market {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn n(&self) -> usize {
        self.settings.players
    }
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn points(&self) -> &[Utility] {
        &self.points
    }
    pub fn profits(&self) -> &[Utility] {
        &self.profits
    }
    pub fn wins(&self) -> &[Option<Player>] {
        &self.wins
    }
    /// Joint actions, one vector per round played.
    pub fn joint_history(&self) -> &[Vec<Action>] {
        &self.history
    }
    /// One player's actions, one per round played.
    pub fn actions_of(&self, player: Player) -> Vec<Action> {
        let player = self.seat(player);
        self.history.iter().map(|joint| joint[player]).collect()
    }
    /// Top scorers, empty until the game is over.
    pub fn winners(&self) -> &BTreeSet<Player> {
        &self.winners
    }
    /// Panics unless `player` is a seat at this table.
    pub(crate) fn seat(&self, player: Player) -> Player {
        assert!(
            player < self.n(),
            "player {} out of range for {} players",
            player,
            self.n()
        );
        player
    }
    fn joint(&self) -> Joint {
        Joint::new(self.n(), self.settings.num_options)
    }
}

/// Round resolution.
impl Market {
    /// Fallible version of [`State::apply_actions`].
    ///
    /// Returns `Err` without touching the state if the game is over, the
    /// number of actions differs from the number of players, or any action
    /// is outside the price grid.
    pub fn try_apply_actions(&mut self, actions: &[Action]) -> anyhow::Result<()> {
        self.check(actions)?;
        self.act(actions);
        Ok(())
    }
    fn check(&self, actions: &[Action]) -> anyhow::Result<()> {
        if self.turn.is_terminal() {
            anyhow::bail!("game is over after {} rounds", self.round);
        }
        if actions.len() != self.n() {
            anyhow::bail!(
                "expected {} actions, found {}",
                self.n(),
                actions.len()
            );
        }
        if let Some((p, a)) = actions
            .iter()
            .enumerate()
            .find(|(_, a)| **a >= self.settings.num_options)
        {
            anyhow::bail!(
                "P{} chose price level {} of {}",
                p,
                a,
                self.settings.num_options
            );
        }
        Ok(())
    }
    fn act(&mut self, actions: &[Action]) {
        self.wins.push(Self::undercutter(actions));
        let prices = self.grid.prices(actions);
        self.profits = self.logit.profits(&prices);
        self.points
            .iter_mut()
            .zip(&self.profits)
            .for_each(|(points, profit)| *points += profit);
        self.history.push(actions.to_vec());
        self.round += 1;
        log::trace!(
            "round {} actions {:?} profits {:?}",
            self.round,
            actions,
            self.profits
        );
        if self.round == self.settings.num_turns {
            self.settle();
        }
    }
    /// The unique player with the lowest price level, `None` on a tie.
    pub fn undercutter(actions: &[Action]) -> Option<Player> {
        let lowest = actions.iter().min()?;
        let mut cheapest = actions
            .iter()
            .enumerate()
            .filter(|(_, a)| *a == lowest)
            .map(|(p, _)| p);
        match (cheapest.next(), cheapest.next()) {
            (Some(p), None) => Some(p),
            _ => None,
        }
    }
    fn settle(&mut self) {
        let best = self
            .points
            .iter()
            .copied()
            .fold(Utility::NEG_INFINITY, Utility::max);
        self.winners = self
            .points
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == best)
            .map(|(p, _)| p)
            .collect();
        self.turn = Turn::Terminal;
        log::debug!(
            "market closed after {} rounds, points {:?}, winners {:?}",
            self.round,
            self.points,
            self.winners
        );
    }
}

impl State for Market {
    fn current_player(&self) -> Turn {
        self.turn
    }
    fn legal_actions(&self, turn: Turn) -> Vec<Action> {
        if self.turn.is_terminal() {
            return vec![];
        }
        match turn {
            Turn::Simultaneous => match self.joint().size() {
                Some(size) => (0..size).collect(),
                None => panic!(
                    "{}^{} joint actions do not fit in usize, ask per seat instead",
                    self.settings.num_options,
                    self.n()
                ),
            },
            Turn::Choice(p) => {
                self.seat(p);
                (0..self.settings.num_options).collect()
            }
            Turn::Terminal => panic!("no actions for {} while the game is live", turn),
        }
    }
    fn apply_actions(&mut self, actions: &[Action]) {
        if let Err(e) = self.check(actions) {
            panic!("{}", e);
        }
        self.act(actions);
    }
    fn apply_action(&mut self, flat: Action) {
        let actions = self.joint().decode(flat);
        self.apply_actions(&actions);
    }
    fn is_terminal(&self) -> bool {
        self.turn.is_terminal()
    }
    fn returns(&self) -> Vec<Utility> {
        match self.turn {
            Turn::Terminal => self.settings.returns_type.settle(&self.points, &self.winners),
            _ => vec![0.; self.n()],
        }
    }
    fn action_to_string(&self, turn: Turn, action: Action) -> String {
        match turn {
            Turn::Simultaneous => format!(
                "[{}]",
                self.joint()
                    .decode(action)
                    .into_iter()
                    .enumerate()
                    .map(|(p, a)| self.action_to_string(Turn::Choice(p), a))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Turn::Choice(p) => {
                self.seat(p);
                assert!(
                    action < self.settings.num_options,
                    "price level {} out of range",
                    action
                );
                format!("[P{}]: {}", p, action + 1)
            }
            Turn::Terminal => panic!("terminal has no actions"),
        }
    }
    fn history(&self) -> Vec<Action> {
        self.history.iter().flatten().copied().collect()
    }
    fn information_state_string(&self, player: Player) -> String {
        Observer::new(Visibility::information_state(), self.settings.egocentric).string(self, player)
    }
    fn information_state_tensor(&self, player: Player) -> Vec<Feature> {
        Observer::new(Visibility::information_state(), self.settings.egocentric)
            .tensor(self, player)
            .flatten()
    }
    fn observation_string(&self, player: Player) -> String {
        Observer::new(Visibility::observation(), self.settings.egocentric).string(self, player)
    }
    fn observation_tensor(&self, player: Player) -> Vec<Feature> {
        Observer::new(Visibility::observation(), self.settings.egocentric)
            .tensor(self, player)
            .flatten()
    }
    fn clone_box(&self) -> Box<dyn State> {
        Box::new(self.clone())
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (p, profit) in self.profits.iter().enumerate() {
            writeln!(f, "P{} profit: {}", p, profit)?;
        }
        if self.settings.imp_info {
            for p in 0..self.n() {
                write!(f, "P{} actions: ", p)?;
                for joint in self.history.iter() {
                    write!(f, "{} ", joint[p])?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f)?;
        write!(f, "Points: ")?;
        for points in self.points.iter() {
            write!(f, "{} ", points)?;
        }
        writeln!(f)
    }
}
