pub mod guesser;
pub mod registry;
pub mod vocabulary;

pub use guesser::GuessProperties;
pub use relmeta_props::{Guess, GuessError, GuessedValue, Validator};
