/*!
Configuration of a context.

All configuration for a context is contained within the [Config] structure, and defaults are given in [defaults].
*/

pub mod defaults;

/// The number of free atoms beyond which a solve does not enumerate valuations.
pub type EnumerationLimit = usize;

/// The largest number of elements for which intermediate matrices are worth displaying.
pub type MatrixDisplayLimit = usize;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The number of free atoms beyond which a solve does not enumerate valuations, if any.
    ///
    /// Regardless of this limit, enumeration is never attempted over [MAX_FREE_ATOMS](defaults::MAX_FREE_ATOMS) or more atoms.
    pub enumeration_limit: Option<EnumerationLimit>,

    /// The largest number of elements for which an observer of the closure should display intermediate matrices.
    pub matrix_display_limit: MatrixDisplayLimit,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            enumeration_limit: Some(ENUMERATION_LIMIT),
            matrix_display_limit: MATRIX_DISPLAY_LIMIT,
        }
    }
}

impl Config {
    /// The limit on free atoms enforced by a solve, given the configured limit and [MAX_FREE_ATOMS](defaults::MAX_FREE_ATOMS).
    pub fn effective_enumeration_limit(&self) -> EnumerationLimit {
        match self.enumeration_limit {
            Some(limit) => limit.min(defaults::MAX_FREE_ATOMS),
            None => defaults::MAX_FREE_ATOMS,
        }
    }
}
