use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cards::{build_cards, Card, CardId, Location, Owner};
use crate::deck::ValueRoller;
use crate::errors::GameError;
use crate::game::{Notice, RoundOutcome, RoundState, Score, Winner};
use crate::policy::{OpponentPolicy, RandomPolicy};
use crate::rules;
use crate::scheduler::{Scheduler, Step, StepQueue, Ticket};
use crate::zones::{DiscardCounts, Hand, PlayArea};

/// Default number of cards dealt to each side.
pub const DEFAULT_HAND_SIZE: usize = 5;
/// Largest hand either side may be dealt.
pub const MAX_HAND_SIZE: usize = 26;

/// Pause after each step of a round. Purely cosmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Pacing {
    /// `play_card` → `opponent_play`
    pub opponent_delay: Duration,
    /// `opponent_play` → `resolve`
    pub resolve_delay: Duration,
    /// `resolve` → `discard_and_reset`
    pub settle_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            opponent_delay: Duration::from_millis(250),
            resolve_delay: Duration::from_millis(200),
            settle_delay: Duration::from_millis(1200),
        }
    }
}

impl Pacing {
    pub fn instant() -> Self {
        Self {
            opponent_delay: Duration::ZERO,
            resolve_delay: Duration::ZERO,
            settle_delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub player_hand: usize,
    pub opponent_hand: usize,
    /// RNG seed; a fixed default is used when absent
    pub seed: Option<u64>,
    pub pacing: Pacing,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            player_hand: DEFAULT_HAND_SIZE,
            opponent_hand: DEFAULT_HAND_SIZE,
            seed: None,
            pacing: Pacing::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        for (who, n) in [("player", self.player_hand), ("opponent", self.opponent_hand)] {
            if n == 0 || n > MAX_HAND_SIZE {
                return Err(GameError::InvalidConfig(format!(
                    "{} hand size must be within 1..={}, got {}",
                    who, MAX_HAND_SIZE, n
                )));
            }
        }
        Ok(())
    }
}

/// Authoritative state of one game session: the cards, the score and the
/// round lifecycle.
///
/// Every operation checks the [`RoundState`] it requires and is a no-op
/// otherwise; none of them returns an error. Deferred steps go through the
/// scheduler `S` as [`Ticket`]s and come back via [`RoundEngine::dispatch`].
///
/// # Examples
///
/// ```
/// use highcard_engine::engine::RoundEngine;
/// use highcard_engine::cards::Owner;
/// use highcard_engine::game::RoundState;
///
/// let mut engine = RoundEngine::with_seed(12345);
/// let first = engine.hand(Owner::Player).ids()[0];
///
/// assert!(engine.play_card(first));
/// assert_eq!(engine.state(), RoundState::AwaitingOpponent);
///
/// // Fire opponent_play, resolve and discard_and_reset.
/// engine.run_until_idle();
/// assert_eq!(engine.state(), RoundState::Idle);
/// assert_eq!(engine.discard_counts().total(), 2);
/// assert!(engine.last_outcome().is_some());
/// ```
pub struct RoundEngine<S: Scheduler = StepQueue> {
    cards: Vec<Card>,
    state: RoundState,
    score: Score,
    roller: ValueRoller,
    policy: Box<dyn OpponentPolicy>,
    scheduler: S,
    pacing: Pacing,
    player_hand: usize,
    opponent_hand: usize,
    /// Bumped by every new game; stale tickets are dropped
    generation: u64,
    rounds_played: u64,
    last_outcome: Option<RoundOutcome>,
    notices: Vec<Notice>,
    outcomes: Vec<RoundOutcome>,
}

impl<S: Scheduler> fmt::Debug for RoundEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundEngine")
            .field("state", &self.state)
            .field("score", &self.score)
            .field("generation", &self.generation)
            .field("policy", &self.policy.name())
            .field("cards", &self.cards)
            .finish_non_exhaustive()
    }
}

impl RoundEngine<StepQueue> {
    pub fn new(config: EngineConfig) -> Result<Self, GameError> {
        Self::with_parts(config, Box::new(RandomPolicy::new()), StepQueue::new())
    }

    /// Default hands, default pacing, random opponent.
    pub fn with_seed(seed: u64) -> Self {
        let config = EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        };
        let mut engine = Self::assemble(config, Box::new(RandomPolicy::new()), StepQueue::new());
        engine.deal();
        engine
    }

    /// Fires the earliest pending ticket. Returns the virtual time waited.
    pub fn tick(&mut self) -> Option<Duration> {
        let (waited, ticket) = self.scheduler.pop_next()?;
        self.dispatch(ticket);
        Some(waited)
    }

    /// Fires pending tickets until none are left. Returns how many fired.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while self.tick().is_some() {
            fired += 1;
        }
        fired
    }
}

impl<S: Scheduler> RoundEngine<S> {
    pub fn with_parts(
        config: EngineConfig,
        policy: Box<dyn OpponentPolicy>,
        scheduler: S,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let mut engine = Self::assemble(config, policy, scheduler);
        engine.deal();
        Ok(engine)
    }

    fn assemble(config: EngineConfig, policy: Box<dyn OpponentPolicy>, scheduler: S) -> Self {
        let seed = config.seed.unwrap_or(0x4843_4152);
        Self {
            cards: build_cards(config.player_hand, config.opponent_hand),
            state: RoundState::Idle,
            score: Score::default(),
            roller: ValueRoller::new_with_seed(seed),
            policy,
            scheduler,
            pacing: config.pacing,
            player_hand: config.player_hand,
            opponent_hand: config.opponent_hand,
            generation: 0,
            rounds_played: 0,
            last_outcome: None,
            notices: Vec::new(),
            outcomes: Vec::new(),
        }
    }

    fn deal(&mut self) {
        for c in &mut self.cards {
            c.location = Location::Hand;
        }
        self.roller.deal(&mut self.cards);
    }

    fn schedule(&mut self, delay: Duration, step: Step) {
        let ticket = Ticket {
            step,
            generation: self.generation,
        };
        debug!(
            ?step,
            generation = self.generation,
            ?delay,
            "step scheduled"
        );
        self.scheduler.schedule(delay, ticket);
    }

    fn move_card(&mut self, id: CardId, to: Location) {
        if let Some(c) = self.cards.get_mut(id.0) {
            debug!(
                card = %id,
                owner = %c.owner,
                from = ?c.location,
                ?to,
                "card moved"
            );
            c.location = to;
        }
    }

    fn move_in_play(&mut self, to: Location) {
        let ids: Vec<CardId> = self
            .cards
            .iter()
            .filter(|c| c.location == Location::InPlay)
            .map(|c| c.id)
            .collect();
        for id in ids {
            self.move_card(id, to);
        }
    }

    fn set_state(&mut self, next: RoundState) {
        debug!(from = ?self.state, to = ?next, "round state");
        self.state = next;
    }

    /// Commits one of the player's cards to the round.
    ///
    /// Ignored (returns `false`) unless the round is idle and `id` names a
    /// card in the player's hand.
    pub fn play_card(&mut self, id: CardId) -> bool {
        if self.state != RoundState::Idle {
            debug!(
                card = %id,
                state = ?self.state,
                "play ignored: round in progress"
            );
            return false;
        }
        let playable = self
            .cards
            .get(id.0)
            .is_some_and(|c| c.is_in_hand_of(Owner::Player));
        if !playable {
            debug!(card = %id, "play ignored: not in player hand");
            return false;
        }
        self.move_card(id, Location::InPlay);
        self.set_state(RoundState::AwaitingOpponent);
        self.schedule(self.pacing.opponent_delay, Step::OpponentPlay);
        true
    }

    /// The computer commits a card chosen by its policy.
    pub fn opponent_play(&mut self) {
        if self.state != RoundState::AwaitingOpponent {
            return;
        }
        let hand = Hand::collect(&self.cards, Owner::Opponent).ids();
        let choice = self
            .policy
            .choose(&hand, self.roller.rng_mut())
            .filter(|id| hand.contains(id));
        self.set_state(RoundState::Resolving);
        match choice {
            Some(id) => {
                self.move_card(id, Location::InPlay);
                self.schedule(self.pacing.resolve_delay, Step::Resolve);
            }
            None => {
                warn!(
                    generation = self.generation,
                    "opponent has no card to play; resolving with the play area as is"
                );
                self.resolve();
            }
        }
    }

    /// Compares the two committed cards and applies the score.
    pub fn resolve(&mut self) {
        if self.state != RoundState::Resolving {
            return;
        }
        let area = PlayArea::collect(&self.cards);
        let (Some(player), Some(opponent)) = (area.player, area.opponent) else {
            warn!(
                player = ?area.player.map(|c| c.id),
                opponent = ?area.opponent.map(|c| c.id),
                "round cancelled: play area incomplete"
            );
            self.move_in_play(Location::Hand);
            self.notices.push(Notice::new("Round cancelled", 1000));
            self.set_state(RoundState::Idle);
            return;
        };
        match rules::evaluate(player.value, opponent.value) {
            Err(e) => {
                warn!(
                    error = %e,
                    player = %player.id,
                    opponent = %opponent.id,
                    "discarding round"
                );
                self.move_card(player.id, Location::Discard);
                self.move_card(opponent.id, Location::Discard);
                self.notices.push(Notice::new("Invalid card value", 1200));
                self.set_state(RoundState::Idle);
            }
            Ok(outcome) => {
                self.score.award(outcome.winner);
                self.rounds_played += 1;
                debug!(
                    player_value = outcome.player_value,
                    opponent_value = outcome.opponent_value,
                    winner = ?outcome.winner,
                    "round resolved"
                );
                self.notices.push(Notice {
                    text: outcome.message(),
                    duration: outcome.display_for(),
                });
                self.outcomes.push(outcome);
                self.last_outcome = Some(outcome);
                self.set_state(RoundState::Settling);
                self.schedule(self.pacing.settle_delay, Step::DiscardAndReset);
            }
        }
    }

    /// Moves the compared cards to their discard piles.
    pub fn discard_and_reset(&mut self) {
        if self.state != RoundState::Settling {
            return;
        }
        self.move_in_play(Location::Discard);
        self.set_state(RoundState::Idle);
    }

    /// Returns every card to its owner, re-rolls values and zeroes the score.
    /// Any round in flight is abandoned.
    pub fn new_game(&mut self) {
        self.generation += 1;
        self.scheduler.cancel_all();
        self.deal();
        self.score = Score::default();
        self.rounds_played = 0;
        self.last_outcome = None;
        self.set_state(RoundState::Idle);
        self.notices.push(Notice::new("New game started", 800));
        debug!(generation = self.generation, "new game");
    }

    /// Runs the step named by `ticket` unless it belongs to an earlier game.
    pub fn dispatch(&mut self, ticket: Ticket) {
        if ticket.generation != self.generation {
            debug!(
                step = ?ticket.step,
                ticket_generation = ticket.generation,
                generation = self.generation,
                "stale ticket dropped"
            );
            return;
        }
        match ticket.step {
            Step::OpponentPlay => self.opponent_play(),
            Step::Resolve => self.resolve(),
            Step::DiscardAndReset => self.discard_and_reset(),
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn seed(&self) -> u64 {
        self.roller.seed()
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Rounds scored since the last new game.
    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Result<&Card, GameError> {
        self.cards.get(id.0).ok_or(GameError::UnknownCard(id))
    }

    pub fn hand(&self, owner: Owner) -> Hand {
        Hand::collect(&self.cards, owner)
    }

    pub fn play_area(&self) -> PlayArea {
        PlayArea::collect(&self.cards)
    }

    pub fn discard_counts(&self) -> DiscardCounts {
        DiscardCounts::collect(&self.cards)
    }

    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn drain_outcomes(&mut self) -> Vec<RoundOutcome> {
        std::mem::take(&mut self.outcomes)
    }

    /// No further round can be scored until a new game.
    pub fn is_game_over(&self) -> bool {
        self.state == RoundState::Idle
            && Owner::all()
                .into_iter()
                .any(|o| Hand::collect(&self.cards, o).is_empty())
    }

    pub fn final_winner(&self) -> Option<Winner> {
        self.is_game_over().then(|| self.score.leader())
    }

    /// Overrides a card's value. `None` or an out-of-range number makes the
    /// card unplayable at resolution time.
    pub fn assign_value(&mut self, id: CardId, value: Option<u8>) -> Result<(), GameError> {
        let card = self.cards.get_mut(id.0).ok_or(GameError::UnknownCard(id))?;
        card.value = value;
        Ok(())
    }

    pub fn check_invariants(&self) -> Result<(), GameError> {
        let expected = self.player_hand + self.opponent_hand;
        if self.cards.len() != expected {
            return Err(GameError::InvariantViolated(format!(
                "card count {} != dealt {}",
                self.cards.len(),
                expected
            )));
        }
        for (i, c) in self.cards.iter().enumerate() {
            if c.id != CardId(i) {
                return Err(GameError::InvariantViolated(format!(
                    "card at {} carries id {}",
                    i, c.id
                )));
            }
        }
        for (owner, n) in [
            (Owner::Player, self.player_hand),
            (Owner::Opponent, self.opponent_hand),
        ] {
            let owned = self.cards.iter().filter(|c| c.owner == owner).count();
            if owned != n {
                return Err(GameError::InvariantViolated(format!(
                    "{} owns {} cards, dealt {}",
                    owner, owned, n
                )));
            }
            let in_play = self
                .cards
                .iter()
                .filter(|c| c.owner == owner && c.location == Location::InPlay)
                .count();
            if in_play > 1 {
                return Err(GameError::InvariantViolated(format!(
                    "{} has {} cards in play",
                    owner, in_play
                )));
            }
        }
        let area = self.play_area();
        let consistent = match self.state {
            RoundState::Idle => area.is_empty(),
            RoundState::AwaitingOpponent => area.player.is_some() && area.opponent.is_none(),
            RoundState::Resolving => area.player.is_some(),
            RoundState::Settling => area.len() == 2,
        };
        if !consistent {
            return Err(GameError::InvariantViolated(format!(
                "play area holds {} cards in state {:?}",
                area.len(),
                self.state
            )));
        }
        Ok(())
    }
}
