use crate::tictactoe::board::Marker;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player {
    marker: Marker,
    score: u32,
}

impl Player {
    pub fn new(marker: Marker) -> Self {
        Player { marker, score: 0 }
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    // Number of rounds this player has won
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Players([Player; 2]);

impl Default for Players {
    fn default() -> Self {
        Players([Player::new(Marker::X), Player::new(Marker::O)])
    }
}

impl Players {
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
}

impl Index<Marker> for Players {
    type Output = Player;

    fn index(&self, marker: Marker) -> &Self::Output {
        match marker {
            Marker::X => &self.0[0],
            Marker::O => &self.0[1],
        }
    }
}

impl IndexMut<Marker> for Players {
    fn index_mut(&mut self, marker: Marker) -> &mut Self::Output {
        match marker {
            Marker::X => &mut self.0[0],
            Marker::O => &mut self.0[1],
        }
    }
}
