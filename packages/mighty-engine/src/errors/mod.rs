//! Error handling for the Mighty engine.

pub mod domain;
pub mod error_code;

pub use domain::{
    BiddingError, CardParseError, DealError, GameError, IllegalPlayError, InvalidDiscardError,
    StateError,
};
pub use error_code::ErrorCode;
