use std::fmt;

use crate::api::constants::DEFAULT_DEVICE_UUID;

/// Session credentials copied from a logged-in PontoMais web session.
///
/// Read-only for the whole run. `token` always mirrors `access_token`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub token: String,
    pub uid: String,
    pub client: String,
    pub uuid: String,
}

impl Credentials {
    pub fn new(access_token: &str, uid: &str, client: &str, uuid: Option<&str>) -> Self {
        Self {
            access_token: access_token.to_string(),
            token: access_token.to_string(),
            uid: uid.to_string(),
            client: client.to_string(),
            uuid: uuid
                .filter(|u| !u.trim().is_empty())
                .unwrap_or(DEFAULT_DEVICE_UUID)
                .to_string(),
        }
    }

    /// Build credentials only when every required value is present and non-empty.
    pub fn from_parts(
        access_token: Option<&str>,
        uid: Option<&str>,
        client: Option<&str>,
        uuid: Option<&str>,
    ) -> Option<Self> {
        Some(Self::new(
            present(access_token)?,
            present(uid)?,
            present(client)?,
            uuid,
        ))
    }
}

fn present(v: Option<&str>) -> Option<&str> {
    v.map(str::trim).filter(|s| !s.is_empty())
}

// Tokens never end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"***")
            .field("token", &"***")
            .field("uid", &self.uid)
            .field("client", &"***")
            .field("uuid", &self.uuid)
            .finish()
    }
}
