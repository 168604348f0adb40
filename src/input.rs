//! Command-line input parsing
//!
//! The drivers take plain numeric arguments. A token that does not parse as
//! a number is a fatal input error; out-of-range values are not errors and
//! are handled later by the spawn rules.

use thiserror::Error;

use crate::sim::Point;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("argument {0:?} is not a number")]
    NotANumber(String, #[source] std::num::ParseFloatError),
}

/// Parse every argument as a ball size
pub fn parse_sizes(args: &[String]) -> Result<Vec<f64>, ParseError> {
    args.iter()
        .map(|arg| {
            arg.parse::<f64>()
                .map_err(|err| ParseError::NotANumber(arg.clone(), err))
        })
        .collect()
}

/// Parse the single-ball driver's `x y dx dy` quadruple.
///
/// Returns `None` when fewer than four arguments are present, leaving the
/// caller to fall back to its default ball.
pub fn parse_start(args: &[String]) -> Result<Option<(Point, f64, f64)>, ParseError> {
    if args.len() < 4 {
        return Ok(None);
    }
    let nums = parse_sizes(&args[..4])?;
    Ok(Some((Point::new(nums[0], nums[1]), nums[2], nums[3])))
}
