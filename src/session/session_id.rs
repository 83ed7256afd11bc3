use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use rand::RngCore;
use uuid::{Builder, Uuid, Variant, Version};

use crate::utils::crypto_rng;

/// Length of the lowercase hyphenated text form, the only form written to storage.
const HYPHENATED_LENGTH: usize = 36;

/// An anonymous identifier for a single browser (or native install). Always a random (version 4)
/// RFC 4122 UUID.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(Uuid);

impl SessionId {
    /// Builds an identifier from 16 bytes drawn from `rng`. Six of the 128 bits are overwritten
    /// with the version and variant markers, leaving 122 random bits.
    pub fn generate(rng: &mut impl RngCore) -> Self {
        let mut random_bytes = [0u8; 16];
        rng.fill_bytes(&mut random_bytes);
        Self(Builder::from_random_bytes(random_bytes).into_uuid())
    }

    pub fn random() -> Self {
        Self::generate(&mut crypto_rng())
    }

    pub fn parse(input: &str) -> Result<Self, SessionIdError> {
        if input.len() != HYPHENATED_LENGTH {
            return Err(SessionIdError::Malformed(input.to_string()));
        }

        let uuid =
            Uuid::try_parse(input).map_err(|_| SessionIdError::Malformed(input.to_string()))?;

        if uuid.get_version() != Some(Version::Random) {
            return Err(SessionIdError::WrongVersion(uuid.get_version_num()));
        }

        if uuid.get_variant() != Variant::RFC4122 {
            return Err(SessionIdError::WrongVariant(uuid.get_variant()));
        }

        Ok(Self(uuid))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for SessionId {
    type Err = SessionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SessionId {
    type Error = SessionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SessionId> for String {
    fn from(val: SessionId) -> Self {
        val.to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionIdError {
    #[error("not a hyphenated UUID: {0:?}")]
    Malformed(String),

    #[error("expected an RFC 4122 variant UUID, found {0:?}")]
    WrongVariant(Variant),

    #[error("expected a random (v4) UUID, found version {0}")]
    WrongVersion(usize),
}
