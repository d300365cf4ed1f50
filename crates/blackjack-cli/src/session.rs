use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use blackjack_core::AppInfo;
use blackjack_core::game::round::{RoundOutcome, RoundState};
use blackjack_core::game::turn::{Action, ActionPolicy, DealerPolicy};
use blackjack_core::model::deck::Deck;
use blackjack_core::model::hand::Hand;
use blackjack_core::model::participant::Participant;
use blackjack_core::model::score::HandScore;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::input;
use crate::record::{RoundRecord, RoundRecorder};

pub const DEFAULT_PACKS: usize = 6;
pub const DEFAULT_PACE_MS: u64 = 600;

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub packs: usize,
    pub seed: Option<u64>,
    pub pace: Duration,
    pub show_shoe: bool,
    pub record: Option<PathBuf>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            packs: DEFAULT_PACKS,
            seed: None,
            pace: Duration::from_millis(DEFAULT_PACE_MS),
            show_shoe: false,
            record: None,
        }
    }
}

/// One console sitting: rounds against a fresh shoe until the player quits.
pub struct GameSession<R, W> {
    options: SessionOptions,
    rng: StdRng,
    input: R,
    output: W,
    recorder: Option<RoundRecorder>,
    rounds_played: u32,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    pub fn new(options: SessionOptions, input: R, output: W) -> Result<Self> {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let recorder = options
            .record
            .as_deref()
            .map(RoundRecorder::append_to)
            .transpose()?;
        Ok(Self {
            options,
            rng,
            input,
            output,
            recorder,
            rounds_played: 0,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{} v{}", AppInfo::name(), AppInfo::version())?;
        loop {
            self.play_round()?;
            if !self.prompt_replay()? {
                break;
            }
        }
        writeln!(self.output, "Thanks for playing.")?;
        Ok(())
    }

    fn play_round(&mut self) -> Result<RoundOutcome> {
        self.rounds_played += 1;
        let round_number = self.rounds_played;
        writeln!(self.output)?;
        writeln!(self.output, "Round {round_number}")?;

        let mut deck = Deck::with_packs(self.options.packs).context("building the shoe")?;
        deck.shuffle_in_place(&mut self.rng);
        tracing::debug!(
            round = round_number,
            packs = self.options.packs,
            cards = deck.remaining(),
            "shoe shuffled"
        );
        if self.options.show_shoe {
            for line in deck.display_lines() {
                writeln!(self.output, "{line}")?;
            }
        }

        let mut round = RoundState::deal(deck).context("dealing the opening hands")?;
        if let Some(up_card) = round.hand(Participant::Dealer).cards().first() {
            writeln!(self.output, "Dealer shows {up_card}")?;
        }

        let player_score = {
            let mut policy = ConsolePolicy {
                input: &mut self.input,
                output: &mut self.output,
            };
            round
                .play_turn(Participant::Player, &mut policy)
                .context("player turn")?
        };
        if player_score.is_bust() {
            for line in round.hand(Participant::Player).display_lines() {
                writeln!(self.output, "  {line}")?;
            }
            writeln!(self.output, "You bust!")?;
        } else {
            writeln!(self.output, "You stand on {player_score}.")?;
        }

        writeln!(self.output, "Dealer's turn.")?;
        let dealer_score = {
            let mut policy = PacedDealerPolicy {
                inner: DealerPolicy,
                output: &mut self.output,
                pace: self.options.pace,
            };
            round
                .play_turn(Participant::Dealer, &mut policy)
                .context("dealer turn")?
        };
        if dealer_score.is_bust() {
            for line in round.hand(Participant::Dealer).display_lines() {
                writeln!(self.output, "  {line}")?;
            }
            writeln!(self.output, "Dealer busts!")?;
        } else {
            writeln!(self.output, "Dealer stands on {dealer_score}.")?;
        }

        let outcome = round.outcome();
        writeln!(self.output, "{outcome}")?;
        tracing::info!(
            round = round_number,
            player = %player_score,
            dealer = %dealer_score,
            "round complete"
        );
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.record(&RoundRecord {
                round: round_number,
                player: player_score,
                dealer: dealer_score,
                outcome,
            })?;
        }
        Ok(outcome)
    }

    fn prompt_replay(&mut self) -> Result<bool> {
        let answer = input::prompt(
            &mut self.input,
            &mut self.output,
            "Play again [y/n]? ",
            "Please answer 'y' or 'n'.",
            input::parse_replay,
        )?;
        Ok(answer.unwrap_or(false))
    }
}

struct ConsolePolicy<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> ActionPolicy for ConsolePolicy<'_, R, W> {
    fn choose_action(&mut self, hand: &Hand, score: HandScore) -> Action {
        if show_hand(self.output, "Your hand:", hand, score).is_err() {
            return Action::Stick;
        }
        match input::prompt(
            self.input,
            self.output,
            "Hit or stick [h/s]? ",
            "Please answer 'h' to hit or 's' to stick.",
            input::parse_action,
        ) {
            Ok(Some(action)) => action,
            Ok(None) => {
                tracing::debug!("input closed; standing");
                Action::Stick
            }
            Err(error) => {
                tracing::warn!(%error, "console read failed; standing");
                Action::Stick
            }
        }
    }
}

struct PacedDealerPolicy<'a, W> {
    inner: DealerPolicy,
    output: &'a mut W,
    pace: Duration,
}

impl<W: Write> ActionPolicy for PacedDealerPolicy<'_, W> {
    fn choose_action(&mut self, hand: &Hand, score: HandScore) -> Action {
        if show_hand(self.output, "Dealer's hand:", hand, score).is_err() {
            return Action::Stick;
        }
        let action = self.inner.choose_action(hand, score);
        // pacing is presentation only; --pace-ms 0 disables it
        if action == Action::Hit && !self.pace.is_zero() {
            thread::sleep(self.pace);
        }
        action
    }
}

fn show_hand(
    output: &mut impl Write,
    heading: &str,
    hand: &Hand,
    score: HandScore,
) -> std::io::Result<()> {
    writeln!(output, "{heading}")?;
    for line in hand.display_lines() {
        writeln!(output, "  {line}")?;
    }
    writeln!(output, "Score: {score}")?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::{GameSession, SessionOptions};
    use std::io::Cursor;
    use std::time::Duration;

    fn options(seed: u64) -> SessionOptions {
        SessionOptions {
            packs: 1,
            seed: Some(seed),
            pace: Duration::ZERO,
            show_shoe: false,
            record: None,
        }
    }

    fn run_session(seed: u64, script: &str) -> String {
        let input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut session = GameSession::new(options(seed), input, &mut output).unwrap();
        session.run().unwrap();
        drop(session);
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn a_single_round_runs_to_an_outcome() {
        let text = run_session(7, "s\nn\n");
        assert!(text.contains("Round 1"));
        assert!(text.contains("Dealer shows"));
        assert!(text.contains("Hit or stick"));
        assert!(text.contains("Dealer's turn."));
        assert!(
            text.contains("Player wins") || text.contains("Dealer wins") || text.contains("Draw")
        );
        assert!(text.contains("Thanks for playing."));
    }

    #[test]
    fn replaying_deals_a_fresh_round() {
        let text = run_session(11, "s\ny\ns\nn\n");
        assert!(text.contains("Round 1"));
        assert!(text.contains("Round 2"));
    }

    #[test]
    fn unknown_tokens_neither_deal_nor_end_the_turn() {
        let text = run_session(3, "x\nq\ns\nn\n");
        assert!(text.contains("Please answer 'h' to hit or 's' to stick."));
        // two rejected tokens, then a stick on the unchanged two-card hand
        assert!(text.contains("You stand on"));
        assert!(!text.contains("Round 2"));
    }

    #[test]
    fn closed_input_ends_the_session_cleanly() {
        let text = run_session(5, "");
        assert!(text.contains("Round 1"));
        assert!(text.contains("Thanks for playing."));
    }

    #[test]
    fn show_shoe_dumps_the_shuffled_deck() {
        let input = Cursor::new(b"s\nn\n".to_vec());
        let mut output = Vec::new();
        let mut opts = options(9);
        opts.show_shoe = true;
        let mut session = GameSession::new(opts, input, &mut output).unwrap();
        session.run().unwrap();
        drop(session);
        let text = String::from_utf8(output).unwrap();
        // 52 cards, 13 per line, dumped before the deal
        let dump_lines = text
            .lines()
            .filter(|l| l.split_whitespace().count() == 13)
            .count();
        assert_eq!(dump_lines, 4);
    }
}
