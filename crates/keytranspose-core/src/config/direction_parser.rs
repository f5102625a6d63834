// Keytranspose Config API - Direction String Parser
// Parses direction tokens like "rr" or "dl" into validated step sequences

use smallvec::SmallVec;
use std::fmt;
use strum::IntoEnumIterator;

use crate::Direction;

/// An ordered, non-empty chain of steps applied to every letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectionSequence {
    steps: SmallVec<[Direction; 4]>,
}

/// Errors that can occur during direction parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectionParseError {
    /// Empty token
    #[error("direction string cannot be empty")]
    EmptyInput,

    /// A character that is not one of u, r, d, l
    #[error("invalid direction '{symbol}' in '{token}' (expected u, r, d or l)")]
    InvalidDirection { token: String, symbol: char },
}

impl DirectionSequence {
    /// A one-step sequence
    pub fn single(direction: Direction) -> Self {
        Self {
            steps: SmallVec::from_elem(direction, 1),
        }
    }

    /// Build a sequence from steps; `None` if there are no steps
    pub fn from_steps<I: IntoIterator<Item = Direction>>(steps: I) -> Option<Self> {
        let steps: SmallVec<[Direction; 4]> = steps.into_iter().collect();
        if steps.is_empty() {
            None
        } else {
            Some(Self { steps })
        }
    }

    /// The four single-step sequences used when no directions are requested
    pub fn defaults() -> Vec<Self> {
        Direction::iter().map(Self::single).collect()
    }

    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence has no steps; never true for a parsed sequence
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The sequence that walks this one back to its starting key
    pub fn reversed(&self) -> Self {
        Self {
            steps: self.steps.iter().rev().map(|d| d.opposite()).collect(),
        }
    }
}

impl fmt::Display for DirectionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for DirectionSequence {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_direction_string(s)
    }
}

/// Parse a direction token like "rr" into a sequence of steps
///
/// Every character must independently be one of `u`, `r`, `d`, `l`.
///
/// # Examples
/// ```
/// use keytranspose_core::config::parse_direction_string;
/// use keytranspose_core::Direction;
/// let seq = parse_direction_string("dl").unwrap();
/// assert_eq!(seq.steps(), &[Direction::Down, Direction::Left]);
/// ```
pub fn parse_direction_string(token: &str) -> Result<DirectionSequence, DirectionParseError> {
    if token.is_empty() {
        return Err(DirectionParseError::EmptyInput);
    }

    let mut steps = SmallVec::new();
    for symbol in token.chars() {
        let direction =
            Direction::from_symbol(symbol).ok_or_else(|| DirectionParseError::InvalidDirection {
                token: token.to_string(),
                symbol,
            })?;
        steps.push(direction);
    }

    Ok(DirectionSequence { steps })
}

/// Parse every command-line token, falling back to the defaults when there are none
///
/// Each token becomes its own sequence; tokens are never combined. The first
/// invalid token fails the whole call.
pub fn parse_direction_args<S: AsRef<str>>(
    tokens: &[S],
) -> Result<Vec<DirectionSequence>, DirectionParseError> {
    if tokens.is_empty() {
        return Ok(DirectionSequence::defaults());
    }

    tokens
        .iter()
        .map(|token| parse_direction_string(token.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_step() {
        let seq = parse_direction_string("l").unwrap();
        assert_eq!(seq.steps(), &[Direction::Left]);
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_parse_chained_steps() {
        let seq = parse_direction_string("rrd").unwrap();
        assert_eq!(
            seq.steps(),
            &[Direction::Right, Direction::Right, Direction::Down]
        );
        assert_eq!(seq.to_string(), "rrd");
    }

    #[test]
    fn test_parse_long_sequence_spills() {
        let seq = parse_direction_string("udududud").unwrap();
        assert_eq!(seq.len(), 8);
    }

    #[test]
    fn test_parse_empty_string() {
        assert_eq!(
            parse_direction_string(""),
            Err(DirectionParseError::EmptyInput)
        );
    }

    #[test]
    fn test_parse_invalid_names_offending_char() {
        let err = parse_direction_string("rzr").unwrap_err();
        assert_eq!(
            err,
            DirectionParseError::InvalidDirection {
                token: "rzr".to_string(),
                symbol: 'z',
            }
        );
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            parse_direction_string("U"),
            Err(DirectionParseError::InvalidDirection { symbol: 'U', .. })
        ));
    }

    #[test]
    fn test_args_default_to_single_steps() {
        let empty: [&str; 0] = [];
        let seqs = parse_direction_args(&empty).unwrap();
        let rendered: Vec<String> = seqs.iter().map(|s| s.to_string()).collect();
        assert_eq!(rendered, vec!["u", "r", "d", "l"]);
    }

    #[test]
    fn test_args_reject_empty_token() {
        assert_eq!(
            parse_direction_args(&[""]),
            Err(DirectionParseError::EmptyInput)
        );
        assert_eq!(
            parse_direction_args(&["r", ""]),
            Err(DirectionParseError::EmptyInput)
        );
    }

    #[test]
    fn test_args_keep_tokens_separate() {
        let seqs = parse_direction_args(&["rr", "dl"]).unwrap();
        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs[0].to_string(), "rr");
        assert_eq!(seqs[1].to_string(), "dl");
    }

    #[test]
    fn test_args_fail_on_any_bad_token() {
        let result = parse_direction_args(&["r", "zz"]);
        assert!(matches!(
            result,
            Err(DirectionParseError::InvalidDirection { symbol: 'z', .. })
        ));
    }

    #[test]
    fn test_reversed() {
        let seq = parse_direction_string("rrd").unwrap();
        assert_eq!(seq.reversed().to_string(), "ull");
        assert_eq!(seq.reversed().reversed(), seq);
    }

    #[test]
    fn test_from_steps_rejects_empty() {
        assert!(DirectionSequence::from_steps(Vec::new()).is_none());
        let seq = DirectionSequence::from_steps([Direction::Up, Direction::Left]).unwrap();
        assert_eq!(seq.to_string(), "ul");
    }
}
