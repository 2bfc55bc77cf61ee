//! Ingredient string parsing.
//!
//! Recipes list their components as free text. An explicit count is only
//! recognised in the `x<count> <name>` form; every other shape is a single
//! unit of the whole string.

use std::convert::Infallible;
use std::str::FromStr;

/// Marker that introduces an explicit count.
const COUNT_PREFIX: char = 'x';

/// A single parsed ingredient reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParsedIngredient {
    /// Always at least 1. Counts beyond `u32::MAX` saturate.
    pub quantity: u32,
    /// Trimmed name. May be empty; callers discard empty names.
    pub item_name: String,
}

/// Parses one raw ingredient string. Never fails.
///
/// ```
/// use handbook_core::parse;
///
/// let parsed = parse("x2 Perfect Bear Pelt");
/// assert_eq!(parsed.quantity, 2);
/// assert_eq!(parsed.item_name, "Perfect Bear Pelt");
///
/// // No remainder after the count: the stripped token becomes the name.
/// assert_eq!(parse("x5").item_name, "5");
/// ```
pub fn parse(raw: &str) -> ParsedIngredient {
    let (prefixed, cleaned) = match raw.strip_prefix(COUNT_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    // A count after the separator is taken even when nothing follows it; the
    // empty name is then dropped by aggregation.
    if prefixed
        && let Some((token, remainder)) = cleaned.split_once(char::is_whitespace)
        && let Ok(count) = token.parse::<u64>()
        && count > 0
    {
        return ParsedIngredient {
            quantity: u32::try_from(count).unwrap_or(u32::MAX),
            item_name: remainder.trim().to_string(),
        };
    }

    ParsedIngredient {
        quantity: 1,
        item_name: cleaned.trim().to_string(),
    }
}

impl FromStr for ParsedIngredient {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

impl From<&str> for ParsedIngredient {
    fn from(raw: &str) -> Self {
        parse(raw)
    }
}
