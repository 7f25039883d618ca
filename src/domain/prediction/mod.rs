pub mod entities;
pub mod value_objects;

pub use entities::{Prediction, PriceHistory};
pub use value_objects::{DOWN_COLOR, Direction, PricePoint, Ticker, UP_COLOR};
