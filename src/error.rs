use std::io;

/// Errors produced by [`OrderedSet`](crate::OrderedSet).
///
/// Set operations themselves never fail. Only writing the tree to an output
/// sink can.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Writing to the output sink failed.
    #[error("Failed to write tree to output sink (error: {0})")]
    Output(#[from] io::Error),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
