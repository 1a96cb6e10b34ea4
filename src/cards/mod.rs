pub mod basic;
pub mod hands;


pub use basic::{Card, CardError, Rank, Suit};
pub use hands::{compare_hands, Hand, HandError, Kind, Rules, HAND_SIZE};
