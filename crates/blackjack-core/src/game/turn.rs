use crate::model::deck::{Deck, DeckError};
use crate::model::hand::Hand;
use crate::model::score::HandScore;

/// The dealer stands on soft or hard 17.
pub const DEALER_STAND_MIN: u8 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Hit,
    Stick,
}

/// Decision seam between the turn loop and whoever controls the hand.
pub trait ActionPolicy {
    fn choose_action(&mut self, hand: &Hand, score: HandScore) -> Action;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DealerPolicy;

impl ActionPolicy for DealerPolicy {
    fn choose_action(&mut self, _hand: &Hand, score: HandScore) -> Action {
        if dealer_should_hit(score) {
            Action::Hit
        } else {
            Action::Stick
        }
    }
}

pub fn dealer_should_hit(score: HandScore) -> bool {
    matches!(score, HandScore::Points(points) if points < DEALER_STAND_MIN)
}

/// Runs one participant's turn to completion. Every iteration either ends
/// the turn or consumes a card, so the loop is bounded by the deck; an
/// exhausted deck surfaces as `DeckError::Empty`.
pub fn run_turn<P>(deck: &mut Deck, hand: &mut Hand, policy: &mut P) -> Result<HandScore, DeckError>
where
    P: ActionPolicy + ?Sized,
{
    loop {
        let score = hand.score();
        if score.is_bust() {
            return Ok(score);
        }
        match policy.choose_action(hand, score) {
            Action::Stick => return Ok(score),
            Action::Hit => {
                let card = deck.deal_one()?;
                hand.add(card);
            }
        }
    }
}
