use crate::membership_level::MembershipLevel;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::Serialize;

/// A validated membership card.
/// A card can be shared by several people: their names are kept in the order the service sent them.
///
/// It is only built from a classified [MembershipLevel] and is serialized for display, never read back.
#[derive(Debug, Getters, PartialEq, Eq, Clone, Serialize)]
pub struct MembershipRecord {
    card_id: String,
    member_names: Vec<String>,
    member_level: String,
    member_zip: String,
    expiration_date: DateTime<Utc>,
    is_reciprocal_member: bool,
    is_life_membership: bool,
}

impl MembershipRecord {
    pub fn new(
        card_id: String,
        member_names: Vec<String>,
        level: MembershipLevel,
        member_zip: String,
        expiration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            card_id,
            member_names,
            is_reciprocal_member: *level.is_reciprocal_member(),
            is_life_membership: *level.is_life_membership(),
            member_level: level.name().clone(),
            member_zip,
            expiration_date,
        }
    }

    /// Full name of the person at `index` on this card, if any.
    pub fn member_name(&self, index: usize) -> Option<&str> {
        self.member_names.get(index).map(String::as_str)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use chrono::TimeZone;

    pub const CARD_ID: &str = "42";
    pub const MEMBER_ZIP: &str = "60601";

    pub fn get_expected_membership_record() -> MembershipRecord {
        MembershipRecord::new(
            CARD_ID.to_owned(),
            vec!["Ada Lovelace".to_owned()],
            MembershipLevel::classify("Life Membership"),
            MEMBER_ZIP.to_owned(),
            Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    impl MembershipRecord {
        pub fn new_test(card_id: &str, member_names: &[&str]) -> Self {
            MembershipRecord::new(
                card_id.to_owned(),
                member_names.iter().map(|name| (*name).to_owned()).collect(),
                MembershipLevel::classify("Member"),
                MEMBER_ZIP.to_owned(),
                Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            )
        }
    }

    #[test]
    fn should_take_flags_from_level() {
        let record = get_expected_membership_record();

        assert_eq!("Life Member", record.member_level());
        assert!(*record.is_life_membership());
        assert!(!record.is_reciprocal_member());
    }

    #[test]
    fn should_serialize_flags_with_level() {
        let record = MembershipRecord::new_test(CARD_ID, &["Ada Lovelace"]);

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!("Member", json["member_level"]);
        assert_eq!(false, json["is_life_membership"]);
        assert_eq!(false, json["is_reciprocal_member"]);
        assert_eq!("2030-01-01T00:00:00Z", json["expiration_date"]);
    }

    #[test]
    fn should_get_member_name() {
        let record = MembershipRecord::new_test(CARD_ID, &["Ada Lovelace", "Charles Babbage"]);

        assert_eq!(Some("Charles Babbage"), record.member_name(1));
        assert_eq!(None, record.member_name(2));
    }
}
