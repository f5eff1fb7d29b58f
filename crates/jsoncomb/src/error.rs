//! The crate's single failure kind.

use thiserror::Error;

/// The input was not recognized by the grammar.
///
/// Deliberately payload-free: no position, no expected-token information.
/// Richer diagnostics would require threading location state through every
/// combinator and are an explicit future enhancement, not part of this
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input did not match the JSON grammar")]
pub struct NoMatch;
