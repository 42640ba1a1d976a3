use crate::storage::Result;
use crate::storage::database::model::MemberSessionEntry;
use crate::storage::database::schema::member_session_entry;
use crate::storage::error::StorageError::UnderlyingDatabase;
use diesel::prelude::*;

pub fn get_entry(connection: &mut SqliteConnection, entry_key: &str) -> Result<Option<String>> {
    let entry: Option<MemberSessionEntry> = member_session_entry::table
        .filter(member_session_entry::key.eq(entry_key))
        .select(MemberSessionEntry::as_select())
        .first(connection)
        .optional()?;

    Ok(entry.map(MemberSessionEntry::into_value))
}

/// Update the entry if it exists, insert it otherwise.
pub fn set_entry(connection: &mut SqliteConnection, entry_key: &str, entry_value: &str) -> Result<()> {
    let result = diesel::update(
        member_session_entry::table.filter(member_session_entry::key.eq(entry_key)),
    )
    .set(member_session_entry::value.eq(entry_value))
    .execute(connection)?;

    if result == 1 {
        trace!("Updated session entry {entry_key}");
    } else {
        let result = diesel::insert_into(member_session_entry::table)
            .values(MemberSessionEntry::new(entry_key, entry_value))
            .execute(connection)?;

        if result != 1 {
            return Err(UnderlyingDatabase(format!(
                "Can't insert session entry {entry_key}"
            )));
        }

        trace!("Inserted session entry {entry_key}");
    }

    Ok(())
}

/// Set every entry, or none of them if one fails.
pub fn set_entries(connection: &mut SqliteConnection, entries: &[(&str, &str)]) -> Result<()> {
    connection.transaction(|connection| {
        for (entry_key, entry_value) in entries {
            set_entry(connection, entry_key, entry_value)?;
        }

        Ok(())
    })
}
