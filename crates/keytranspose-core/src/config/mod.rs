// Keytranspose Config API
// Direction token parsing

pub mod direction_parser;

pub use direction_parser::{
    parse_direction_args, parse_direction_string, DirectionParseError, DirectionSequence,
};
