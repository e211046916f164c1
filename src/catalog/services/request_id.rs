use serde::Serialize;
use uuid::Uuid;

/// Number of hex digits shown after the `REQ-` prefix
const DISPLAY_DIGITS: usize = 12;

/// Identifier handed back when an access request is submitted.
///
/// Backed by a random v4 UUID so rapid submissions never collide;
/// the display form is `REQ-` followed by twelve upper-case hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hex = self.0.simple().to_string().to_uppercase();
        write!(f, "REQ-{}", &hex[..DISPLAY_DIGITS])
    }
}

impl Serialize for RequestId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
