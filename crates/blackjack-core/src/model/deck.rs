use crate::model::card::{self, Card};
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

pub const PACK_SIZE: usize = 52;

const CARDS_PER_LINE: usize = 13;

/// A shoe: one or more packs with a head cursor over the next card to deal.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    head: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("a shoe needs at least one pack, got {0}")]
    InvalidPackCount(usize),
    #[error("no cards left to deal")]
    Empty,
}

impl Deck {
    pub fn standard() -> Self {
        Self::with_packs(1).expect("one pack is a valid shoe")
    }

    /// Builds `52 * packs` cards in new-deck order: Spades, Diamonds, Clubs,
    /// Hearts, each running Ace..King.
    pub fn with_packs(packs: usize) -> Result<Self, DeckError> {
        if packs < 1 {
            return Err(DeckError::InvalidPackCount(packs));
        }
        let mut cards = Vec::with_capacity(PACK_SIZE * packs);
        for _ in 0..packs {
            for suit in Suit::ALL.iter().copied() {
                for rank in Rank::ORDERED.iter().copied() {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        Ok(Self { cards, head: 0 })
    }

    pub fn shuffled_with_seed(packs: usize, seed: u64) -> Result<Self, DeckError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck = Self::with_packs(packs)?;
        deck.shuffle_in_place(&mut rng);
        Ok(deck)
    }

    /// Fisher-Yates over the undealt suffix; dealt cards are never revisited.
    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[self.head..].shuffle(rng);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.head
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn deal_one(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.head).ok_or(DeckError::Empty)?;
        self.head += 1;
        Ok(card)
    }

    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.head..]
    }

    pub fn display_lines(&self) -> Vec<String> {
        card::render_lines(self.undealt(), CARDS_PER_LINE)
    }
}
