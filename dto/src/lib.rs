pub mod membership_level;
pub mod membership_record;
pub mod saved_member_info;
