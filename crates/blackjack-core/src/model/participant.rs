use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Participant {
    Player = 0,
    Dealer = 1,
}

impl Participant {
    pub const BOTH: [Participant; 2] = [Participant::Player, Participant::Dealer];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Participant::Player),
            1 => Some(Participant::Dealer),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn opponent(self) -> Participant {
        match self {
            Participant::Player => Participant::Dealer,
            Participant::Dealer => Participant::Player,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Participant::Player => "Player",
            Participant::Dealer => "Dealer",
        };
        f.write_str(label)
    }
}
