use crate::member_card::error::MemberCardError;
use crate::member_card::error::MemberCardError::MalformedResponse;
use chrono::{DateTime, Utc};
use dto::membership_level::MembershipLevel;
use dto::membership_record::MembershipRecord;
use serde::{Deserialize, Serialize};

/// Body of a successful answer from the membership service.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub(crate) struct MemberCardResponse {
    data: MemberCardData,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct MemberCardData {
    id: i64,
    item_name: String,
    valid_until: DateTime<Utc>,
    members: Vec<CardMember>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct CardMember {
    first_name: String,
    last_name: String,
}

impl MemberCardResponse {
    fn into_membership_record(self, zip_code: &str) -> MembershipRecord {
        let MemberCardData {
            id,
            item_name,
            valid_until,
            members,
        } = self.data;

        let member_names = members
            .into_iter()
            .map(|member| format!("{} {}", member.first_name, member.last_name))
            .collect();

        MembershipRecord::new(
            id.to_string(),
            member_names,
            MembershipLevel::classify(&item_name),
            zip_code.to_owned(),
            valid_until,
        )
    }
}

/// Decode the body of a member card response.
/// The zip code isn't part of the response: the one used to request the card is kept instead.
pub fn parse(body: &[u8], zip_code: &str) -> Result<MembershipRecord, MemberCardError> {
    let response: MemberCardResponse = serde_json::from_slice(body).map_err(|error| {
        error!("Can't decode member card response\n{error:#?}");
        MalformedResponse(error.to_string())
    })?;

    Ok(response.into_membership_record(zip_code))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;
    use dto::membership_record::tests::{MEMBER_ZIP, get_expected_membership_record};

    pub const ADA_LOVELACE_BODY: &str = r#"{"data":{"id":42,"item_name":"Life Membership","valid_until":"2030-01-01T00:00:00Z","members":[{"first_name":"Ada","last_name":"Lovelace"}]}}"#;

    pub fn member_card_body(id: i64, item_name: &str, names: &[(&str, &str)]) -> String {
        let response = MemberCardResponse {
            data: MemberCardData {
                id,
                item_name: item_name.to_owned(),
                valid_until: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
                members: names
                    .iter()
                    .map(|(first_name, last_name)| CardMember {
                        first_name: (*first_name).to_owned(),
                        last_name: (*last_name).to_owned(),
                    })
                    .collect(),
            },
        };

        serde_json::to_string(&response).unwrap()
    }

    #[test]
    fn should_parse_member_card() {
        let record = parse(ADA_LOVELACE_BODY.as_bytes(), MEMBER_ZIP).unwrap();

        assert_eq!(get_expected_membership_record(), record);
        assert_eq!("42", record.card_id());
        assert_eq!(&vec!["Ada Lovelace".to_owned()], record.member_names());
        assert_eq!("Life Member", record.member_level());
        assert!(*record.is_life_membership());
        assert!(!*record.is_reciprocal_member());
        assert_eq!("60601", record.member_zip());
    }

    #[test]
    fn should_parse_member_card_with_several_members() {
        let body = r#"{
            "data": {
                "id": 1234567,
                "item_name": "Sustaining Fellow Gold",
                "valid_until": "2026-06-30T23:59:59-05:00",
                "members": [
                    {"first_name": "Grace", "last_name": "Hopper"},
                    {"first_name": "Alan", "last_name": "Turing"},
                    {"first_name": "Ada", "last_name": "Lovelace"}
                ],
                "unexpected_field": "ignored"
            }
        }"#;

        let record = parse(body.as_bytes(), "10001").unwrap();

        assert_eq!("1234567", record.card_id());
        assert_eq!(
            &vec![
                "Grace Hopper".to_owned(),
                "Alan Turing".to_owned(),
                "Ada Lovelace".to_owned()
            ],
            record.member_names()
        );
        assert_eq!("Sustaining Fellow Gold", record.member_level());
        assert!(*record.is_reciprocal_member());
        assert!(!*record.is_life_membership());
        assert_eq!(
            &Utc.with_ymd_and_hms(2026, 7, 1, 4, 59, 59).unwrap(),
            record.expiration_date()
        );
        assert_eq!("10001", record.member_zip());
    }

    #[test]
    fn should_recover_wire_fields_from_parsed_member_card() {
        let names = [("Grace", "Hopper"), ("Alan", "Turing")];
        let body = member_card_body(987, "Premium Member", &names);

        let record = parse(body.as_bytes(), MEMBER_ZIP).unwrap();

        assert_eq!(987, record.card_id().parse::<i64>().unwrap());
        let recovered_names = record
            .member_names()
            .iter()
            .map(|name| name.split_once(' ').unwrap())
            .collect::<Vec<_>>();
        assert_eq!(names.to_vec(), recovered_names);
        assert_eq!(
            "2030-01-01T00:00:00+00:00",
            record.expiration_date().to_rfc3339()
        );
    }

    #[test]
    fn should_fail_to_parse_malformed_json() {
        let error = parse(b"{\"data\": {\"id\": 42", MEMBER_ZIP).unwrap_err();

        assert!(matches!(error, MalformedResponse(_)));
    }

    #[test]
    fn should_fail_to_parse_when_data_is_missing() {
        let error = parse(br#"{"result": "ok"}"#, MEMBER_ZIP).unwrap_err();

        assert!(matches!(error, MalformedResponse(_)));
    }

    #[test]
    fn should_fail_to_parse_when_field_has_wrong_type() {
        let body = ADA_LOVELACE_BODY.replace(r#""id":42"#, r#""id":"42""#);

        let error = parse(body.as_bytes(), MEMBER_ZIP).unwrap_err();

        assert!(matches!(error, MalformedResponse(_)));
    }

    #[test]
    fn should_fail_to_parse_when_date_is_invalid() {
        let body = ADA_LOVELACE_BODY.replace("2030-01-01T00:00:00Z", "01/01/2030");

        let error = parse(body.as_bytes(), MEMBER_ZIP).unwrap_err();

        assert!(matches!(error, MalformedResponse(_)));
    }

    #[test]
    fn should_fail_to_parse_when_members_are_missing() {
        let body = r#"{"data":{"id":42,"item_name":"Life Membership","valid_until":"2030-01-01T00:00:00Z"}}"#;

        let error = parse(body.as_bytes(), MEMBER_ZIP).unwrap_err();

        assert!(matches!(error, MalformedResponse(_)));
    }
}
