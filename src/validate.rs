//! Draft validation.

use crate::record::RecordDraft;

pub const NAME_REQUIRED: &str = "fill in the name field";
pub const PHONE_REQUIRED: &str = "fill in the phone field";

/// Check a draft before it is allowed to mutate the directory.
///
/// Returns the message of the first failing rule, name before phone.
pub fn validate(draft: &RecordDraft) -> Option<&'static str> {
    if draft.name.is_empty() {
        return Some(NAME_REQUIRED);
    }
    if draft.phone.is_empty() {
        return Some(PHONE_REQUIRED);
    }
    None
}
