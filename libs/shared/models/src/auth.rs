use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity reference attached to a request by the session middleware.
///
/// Token verification belongs to the external identity subsystem; inside
/// this service a user is only ever an id that owns appointments and
/// prediction records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Uuid,
}
