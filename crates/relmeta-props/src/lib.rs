pub mod error;
pub mod guess;
pub mod pattern;
pub mod properties;
pub mod quality;
pub mod validator;

pub use error::GuessError;
pub use guess::{Guess, GuessedValue};
pub use pattern::PatternEntry;
pub use properties::{PropertiesBuilder, PropertiesContainer, PropertyMatch};
pub use quality::{QualitiesBuilder, QualitiesContainer};
pub use validator::Validator;
