use std::error::Error as StdError;
use std::fmt;

const DEFAULT_DEPTH_LIMIT: usize = 8;

/// Pretty-prints an error together with the chain of its sources, outermost first:
/// `outer << inner << innermost`.
pub trait StdErrorPP: StdError + Sized {
    fn pp(&self) -> ErrorPP<'_> {
        ErrorPP { err: self, depth_limit: DEFAULT_DEPTH_LIMIT }
    }
}
impl<E> StdErrorPP for E where E: StdError + Sized {}

#[derive(Debug, Clone, Copy)]
pub struct ErrorPP<'a> {
    err: &'a dyn StdError,
    depth_limit: usize,
}

impl<'a> ErrorPP<'a> {
    pub fn of_dyn(err: &'a dyn StdError) -> Self {
        Self { err, depth_limit: DEFAULT_DEPTH_LIMIT }
    }

    /// how many sources to print before eliding the rest
    pub fn depth_limit(self, depth_limit: usize) -> Self {
        Self { depth_limit, ..self }
    }
}

impl fmt::Display for ErrorPP<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)?;

        let mut sources = std::iter::successors(self.err.source(), |&err| err.source());
        for source in sources.by_ref().take(self.depth_limit) {
            write!(f, " << {}", source)?;
        }
        if sources.next().is_some() {
            write!(f, " << ...")?;
        }
        Ok(())
    }
}
