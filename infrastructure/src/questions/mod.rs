//! Question source adapters
//!
//! - [`FeedFileSource`]: a JSON file in the public trivia feed shape
//! - [`BuiltinDeck`]: fifteen questions compiled into the binary

mod builtin;
mod feed;

pub use builtin::BuiltinDeck;
pub use feed::{FeedFileSource, FeedQuestion, FeedResponse, parse_feed};
