use derive_getters::Getters;
use serde::Serialize;

/// What a raw tier name turns into once classified.
#[derive(Debug, PartialEq)]
enum LevelRule {
    /// The tier is displayed under another name and grants a life membership.
    Life { display_name: &'static str },
    /// The tier keeps its name and grants reciprocal privileges.
    Reciprocal,
}

/// Every tier name which is special-cased.
/// Matching is exact and case-sensitive, any other name keeps its value and has no privilege.
const LEVEL_RULES: &[(&str, LevelRule)] = &[
    (
        "Life Membership",
        LevelRule::Life {
            display_name: "Life Member",
        },
    ),
    ("Premium Member", LevelRule::Reciprocal),
    ("Lionhearted Council", LevelRule::Reciprocal),
    ("Lionhearted Roundtable", LevelRule::Reciprocal),
    ("Lionhearted Circle", LevelRule::Reciprocal),
    ("Sustaining Fellow Young", LevelRule::Reciprocal),
    ("Sustaining Fellow", LevelRule::Reciprocal),
    ("Sustaining Fellow Bronze", LevelRule::Reciprocal),
    ("Sustaining Fellow Silver", LevelRule::Reciprocal),
    ("Sustaining Fellow Sterling", LevelRule::Reciprocal),
    ("Sustaining Fellow Gold", LevelRule::Reciprocal),
    ("Sustaining Fellow Platinum", LevelRule::Reciprocal),
];

/// A membership tier, as displayed to the member, with the privileges it grants.
///
/// The only way to get one is to [classify](MembershipLevel::classify) a raw tier name,
/// so that flags can't disagree with the tier they come from.
#[derive(Debug, Getters, PartialEq, Eq, Clone, Serialize)]
pub struct MembershipLevel {
    name: String,
    is_life_membership: bool,
    is_reciprocal_member: bool,
}

impl MembershipLevel {
    pub fn classify(raw_name: &str) -> Self {
        let rule = LEVEL_RULES
            .iter()
            .find(|(name, _)| *name == raw_name)
            .map(|(_, rule)| rule);

        match rule {
            Some(LevelRule::Life { display_name }) => Self {
                name: (*display_name).to_owned(),
                is_life_membership: true,
                is_reciprocal_member: false,
            },
            Some(LevelRule::Reciprocal) => Self {
                name: raw_name.to_owned(),
                is_life_membership: false,
                is_reciprocal_member: true,
            },
            None => Self {
                name: raw_name.to_owned(),
                is_life_membership: false,
                is_reciprocal_member: false,
            },
        }
    }
}
