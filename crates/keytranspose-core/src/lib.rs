// Keytranspose Core Library
// Finds dictionary words that turn into other words when typed with shifted hands

pub mod config;
pub mod dictionary;
pub mod direction;
pub mod key;
pub mod layout;
pub mod settings;
pub mod state;
pub mod sweep;
pub mod transform;

pub use config::{
    parse_direction_args, parse_direction_string, DirectionParseError, DirectionSequence,
};
pub use dictionary::{Dictionary, DictionaryError};
pub use direction::Direction;
pub use key::Key;
pub use layout::KeyboardLayout;
pub use settings::{Settings, SettingsError};
pub use state::SeenPairs;
pub use sweep::{find_transpositions, Sweep, SweepStats, TranspositionResult};
pub use transform::{TransposeEngine, Transposition};
