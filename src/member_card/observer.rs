use dto::membership_record::MembershipRecord;

/// Whoever displays member cards gets told how each validation ended.
/// Exactly one of these methods is called per validation.
pub trait MemberCardObserver: Send + Sync {
    fn on_member_card_loaded(&self, membership_record: &MembershipRecord);

    /// Network and decoding failures are reported the same way: the member can only try again.
    fn on_member_card_load_failed(&self);
}
