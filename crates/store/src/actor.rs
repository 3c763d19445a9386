//! Write-side access policy: reads are open to anyone, mutations require an
//! authenticated identity. How an identity is obtained (login, tokens) is
//! out of scope — callers that hold credentials construct an
//! [`Actor::Authenticated`] and pass it to every mutating operation.

use crate::error::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    Authenticated { user: String },
}

impl Actor {
    pub fn authenticated(user: impl Into<String>) -> Self {
        Self::Authenticated { user: user.into() }
    }

    /// Gate for mutating operations; checked before any SQL runs.
    pub fn require_write(&self) -> Result<(), StoreError> {
        match self {
            Self::Authenticated { .. } => Ok(()),
            Self::Anonymous => Err(StoreError::PolicyDenied),
        }
    }
}
