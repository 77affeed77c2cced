/// The session `uid` is the account email under the backend's token-auth
/// scheme, so referring it means referring yourself. Comparison is
/// trim-then-case-insensitive.
pub fn is_self_referral(friend_email: &str, session_uid: &str) -> bool {
    friend_email.trim().eq_ignore_ascii_case(session_uid.trim())
}

pub fn build_referral_link(origin: &str, code: &str) -> String {
    format!("{}/signup?referral_code={}", origin, code)
}

pub fn format_rewards(rewards_point: f64) -> String {
    format!("${}", rewards_point)
}
