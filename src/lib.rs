#[macro_use]
extern crate log;

pub mod error;
pub mod member_card;
pub mod storage;
mod tools;
pub mod web;

pub use dto::membership_level::MembershipLevel;
pub use dto::membership_record::MembershipRecord;
pub use dto::saved_member_info::SavedMemberInfo;
