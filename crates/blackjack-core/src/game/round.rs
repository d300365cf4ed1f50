use crate::game::turn::{ActionPolicy, run_turn};
use crate::model::deck::{Deck, DeckError};
use crate::model::hand::Hand;
use crate::model::participant::Participant;
use crate::model::score::HandScore;
use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::array;

/// Opening cards dealt to each participant.
pub const INITIAL_DEAL: usize = 2;

/// One round: the shoe plus a hand per participant. Everything is dropped
/// together when the round ends.
#[derive(Debug, Clone)]
pub struct RoundState {
    deck: Deck,
    hands: [Hand; 2],
}

impl RoundState {
    /// Deals the opening hands, alternating player then dealer. If the shoe
    /// runs out mid-deal nothing partially built escapes.
    pub fn deal(mut deck: Deck) -> Result<Self, DeckError> {
        let mut hands: [Hand; 2] = array::from_fn(|_| Hand::new());
        for _ in 0..INITIAL_DEAL {
            for who in Participant::BOTH.iter().copied() {
                let card = deck.deal_one()?;
                hands[who.index()].add(card);
            }
        }
        Ok(Self { deck, hands })
    }

    pub fn hand(&self, who: Participant) -> &Hand {
        &self.hands[who.index()]
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn score(&self, who: Participant) -> HandScore {
        self.hands[who.index()].score()
    }

    pub fn play_turn<P>(&mut self, who: Participant, policy: &mut P) -> Result<HandScore, DeckError>
    where
        P: ActionPolicy + ?Sized,
    {
        run_turn(&mut self.deck, &mut self.hands[who.index()], policy)
    }

    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome::from_scores(
            self.score(Participant::Player),
            self.score(Participant::Dealer),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerWins(HandScore),
    DealerWins(HandScore),
    Draw,
}

impl RoundOutcome {
    pub fn from_scores(player: HandScore, dealer: HandScore) -> Self {
        match player.cmp(&dealer) {
            Ordering::Greater => RoundOutcome::PlayerWins(player),
            Ordering::Less => RoundOutcome::DealerWins(dealer),
            Ordering::Equal => RoundOutcome::Draw,
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::PlayerWins(score) => write!(f, "Player wins with {score}"),
            RoundOutcome::DealerWins(score) => write!(f, "Dealer wins with {score}"),
            RoundOutcome::Draw => f.write_str("Draw"),
        }
    }
}
