use diesel::{Insertable, Queryable, Selectable};

#[derive(Queryable, Selectable, Insertable, Debug, PartialEq)]
#[diesel(table_name = crate::storage::database::schema::member_session_entry)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct MemberSessionEntry {
    key: String,
    value: String,
}

impl MemberSessionEntry {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }

    pub fn into_value(self) -> String {
        self.value
    }
}
