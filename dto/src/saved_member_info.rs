use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What is kept of a member between two sessions, enough to validate their card again.
#[derive(Debug, Getters, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SavedMemberInfo {
    member_id: String,
    member_zip: String,
}

impl SavedMemberInfo {
    pub fn new(member_id: String, member_zip: String) -> Self {
        Self {
            member_id,
            member_zip,
        }
    }
}
