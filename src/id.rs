use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a target or style.
///
/// Minted once when the entity is created (add, duplicate, or decode) and never reassigned.
/// Backed by a random v4 UUID, so values stay distinct for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id-{}", self.0.simple())
    }
}
