use crate::model::hand::Hand;
use core::fmt;
use serde::{Deserialize, Serialize};

const TARGET_TOTAL: u32 = 21;
const SOFT_ACE_SPREAD: u32 = 10;

/// Final classification of a hand.
///
/// Variant order matches round-comparison order: Bust loses to any points
/// total, and a natural beats a later-reached 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandScore {
    Bust,
    Points(u8),
    Blackjack,
}

impl HandScore {
    /// Scores a hand with every Ace counted high, then reduces Aces one at a
    /// time until the total fits or no high Ace remains.
    pub fn from_hand(hand: &Hand) -> Self {
        let mut total: u32 = 0;
        let mut high_aces: u32 = 0;
        for card in hand.iter() {
            total += u32::from(card.score_value());
            if card.is_ace() {
                high_aces += 1;
            }
        }
        while total > TARGET_TOTAL && high_aces > 0 {
            total -= SOFT_ACE_SPREAD;
            high_aces -= 1;
        }
        if total > TARGET_TOTAL {
            HandScore::Bust
        } else if hand.len() == 2 && total == TARGET_TOTAL {
            HandScore::Blackjack
        } else {
            HandScore::Points(total as u8)
        }
    }

    /// Sentinel comparison value: 0 for Bust, 22 for Blackjack.
    pub const fn value(self) -> u8 {
        match self {
            HandScore::Bust => 0,
            HandScore::Points(points) => points,
            HandScore::Blackjack => 22,
        }
    }

    pub const fn is_bust(self) -> bool {
        matches!(self, HandScore::Bust)
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandScore::Bust => f.write_str("Bust"),
            HandScore::Points(points) => write!(f, "{points}"),
            HandScore::Blackjack => f.write_str("Blackjack"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HandScore;
    use crate::model::card::Card;
    use crate::model::hand::Hand;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    fn hand(ranks: &[Rank]) -> Hand {
        // suits never affect the score
        Hand::with_cards(
            ranks
                .iter()
                .map(|&rank| Card::new(rank, Suit::Spades))
                .collect(),
        )
    }

    #[test]
    fn ace_and_king_is_a_natural() {
        assert_eq!(hand(&[Rank::Ace, Rank::King]).score(), HandScore::Blackjack);
    }

    #[test]
    fn three_card_twenty_one_is_not_a_natural() {
        assert_eq!(
            hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).score(),
            HandScore::Points(21)
        );
    }

    #[test]
    fn no_aces_over_twenty_one_busts() {
        assert_eq!(
            hand(&[Rank::Ten, Rank::Nine, Rank::Five]).score(),
            HandScore::Bust
        );
    }

    #[test]
    fn every_ace_reduces_until_the_total_fits() {
        assert_eq!(
            hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Eight]).score(),
            HandScore::Points(11)
        );
    }

    #[test]
    fn two_court_cards_score_twenty() {
        assert_eq!(
            hand(&[Rank::King, Rank::Queen]).score(),
            HandScore::Points(20)
        );
    }

    #[test]
    fn two_aces_reduce_to_twelve() {
        assert_eq!(
            hand(&[Rank::Ace, Rank::Ace]).score(),
            HandScore::Points(12)
        );
    }

    #[test]
    fn comparison_order_matches_the_rules() {
        assert!(HandScore::Blackjack > HandScore::Points(21));
        assert!(HandScore::Points(21) > HandScore::Points(20));
        assert!(HandScore::Bust < HandScore::Points(1));
        assert_eq!(
            HandScore::Points(18).cmp(&HandScore::Points(18)),
            std::cmp::Ordering::Equal
        );
    }

    #[test]
    fn sentinel_values_match_the_rules() {
        assert_eq!(HandScore::Bust.value(), 0);
        assert_eq!(HandScore::Points(17).value(), 17);
        assert_eq!(HandScore::Blackjack.value(), 22);
    }

    #[test]
    fn display_reports_blackjack_by_name() {
        assert_eq!(HandScore::Blackjack.to_string(), "Blackjack");
        assert_eq!(HandScore::Points(18).to_string(), "18");
        assert_eq!(HandScore::Bust.to_string(), "Bust");
    }
}
