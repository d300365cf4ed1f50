use crate::model::card::{self, Card};
use crate::model::score::HandScore;
use std::vec::Vec;

const CARDS_PER_LINE: usize = 7;

/// Cards held by one participant, in the order they were dealt.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn score(&self) -> HandScore {
        HandScore::from_hand(self)
    }

    pub fn display_lines(&self) -> Vec<String> {
        card::render_lines(&self.cards, CARDS_PER_LINE)
    }
}
