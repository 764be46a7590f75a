use crate::config::{self};

pub const ENUMERATION_LIMIT: config::EnumerationLimit = 24;
pub const MATRIX_DISPLAY_LIMIT: config::MatrixDisplayLimit = 6;

/// Candidate valuations are counted with a u64, so at most 63 free atoms may be enumerated.
pub const MAX_FREE_ATOMS: config::EnumerationLimit = 63;
