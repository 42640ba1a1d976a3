use crate::storage;
use crate::storage::KeyValueStorage;
use derive_getters::Getters;
use dto::membership_record::MembershipRecord;
use dto::saved_member_info::SavedMemberInfo;
use std::sync::Arc;

pub const MEMBER_ID_KEY: &str = "member_info_id";
pub const MEMBER_ZIP_KEY: &str = "member_info_zip";
pub const MEMBER_FIRST_NAME_KEY: &str = "member_first_name";
pub const SELECTED_MEMBER_INDEX_KEY: &str = "member_info_selected_member";

/// Everything needed to restore the last validated member.
#[derive(Debug, Getters, PartialEq)]
pub struct SavedSession {
    member_info: SavedMemberInfo,
    selected_name_index: usize,
}

/// Persist the last validated member into a [KeyValueStorage].
pub struct MemberSessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl MemberSessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Store the card and the name selected on it, all at once.
    /// If `selected_name_index` points to no name, an empty first name is stored.
    pub fn save(
        &self,
        membership_record: &MembershipRecord,
        selected_name_index: usize,
    ) -> storage::Result<()> {
        let first_name = membership_record
            .member_name(selected_name_index)
            .map(first_name_of)
            .unwrap_or_default();

        let selected_name_index_value = selected_name_index.to_string();
        self.storage.set_all(&[
            (MEMBER_ID_KEY, membership_record.card_id().as_str()),
            (MEMBER_ZIP_KEY, membership_record.member_zip().as_str()),
            (MEMBER_FIRST_NAME_KEY, first_name),
            (SELECTED_MEMBER_INDEX_KEY, selected_name_index_value.as_str()),
        ])?;

        debug!(
            "Saved member [member_id: {}, selected_name_index: {selected_name_index}]",
            membership_record.card_id()
        );
        Ok(())
    }

    /// Load the saved member, if id, zip code and selected name index have all been stored.
    pub fn load(&self) -> storage::Result<Option<SavedSession>> {
        let member_id = self.storage.get(MEMBER_ID_KEY)?;
        let member_zip = self.storage.get(MEMBER_ZIP_KEY)?;
        let selected_name_index = self
            .storage
            .get(SELECTED_MEMBER_INDEX_KEY)?
            .and_then(|index| match index.parse::<usize>() {
                Ok(index) => Some(index),
                Err(error) => {
                    warn!("Ignoring stored selected name index [value: {index}]: {error}");
                    None
                }
            });

        match (member_id, member_zip, selected_name_index) {
            (Some(member_id), Some(member_zip), Some(selected_name_index)) => {
                Ok(Some(SavedSession {
                    member_info: SavedMemberInfo::new(member_id, member_zip),
                    selected_name_index,
                }))
            }
            _ => Ok(None),
        }
    }
}

/// First word of a full name.
fn first_name_of(full_name: &str) -> &str {
    full_name
        .split(' ')
        .find(|part| !part.is_empty())
        .unwrap_or_default()
}
