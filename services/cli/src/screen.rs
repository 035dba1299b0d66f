//! services/cli/src/screen.rs
//!
//! Renders the browsing session for a terminal: one user per screen as
//! label/value pairs, plus a control prompt. Pure string builders so the
//! layout is testable without capturing stdout.

use user_browser_core::domain::UserRecord;
use user_browser_core::ports::FetchError;

const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------";

/// The full screen for one user record: header, avatar, and the eleven
/// detail fields.
pub fn render_record(user: &UserRecord) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(" {}  (@{})\n", user.full_name(), user.username));
    out.push_str(&format!(" Avatar: {}\n", user.avatar));
    out.push_str(THIN_RULE);
    out.push('\n');
    out.push_str(&field("ID", &user.id.to_string()));
    out.push_str(&field("UID", &user.uid.to_string()));
    out.push_str(&field("Email", &user.email));
    out.push_str(&field("Password", &user.password));
    out.push_str(&field("Gender", &user.gender));
    out.push_str(&field("Phone", &user.phone_number));
    out.push_str(&field("Date of Birth", &user.date_of_birth.to_string()));
    out.push_str(&field(
        "Employment",
        &format!("{} ({})", user.employment.title, user.employment.key_skill),
    ));
    out.push_str(&field(
        "Address",
        &format!(
            "{}, {}, {}",
            user.address.city, user.address.state, user.address.country
        ),
    ));
    out.push_str(&field("Credit Card", &user.credit_card.cc_number));
    out.push_str(&field(
        "Subscription",
        &format!(
            "{}, {}, {}, {}",
            user.subscription.plan,
            user.subscription.status,
            user.subscription.payment_method,
            user.subscription.term
        ),
    ));
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Shown before the first successful fetch, with the failure reason when
/// the initial fetch did not produce a record.
pub fn render_empty(last_error: Option<&FetchError>) -> String {
    match last_error {
        Some(error) => format!("No user loaded: {error}\n"),
        None => "No user loaded yet.\n".to_string(),
    }
}

/// One line reporting a failed forward move while a record stays on screen.
pub fn render_fetch_failure(error: &FetchError) -> String {
    format!("(!) Could not fetch the next user: {error}\n")
}

/// The control prompt. The forward control is suppressed while a fetch is
/// outstanding; the backward control only appears when there is a cached
/// record behind the pointer.
pub fn prompt(loading: bool, can_go_previous: bool) -> String {
    let mut controls: Vec<&str> = Vec::new();
    if !loading {
        controls.push("[n]ext");
    }
    if can_go_previous {
        controls.push("[p]revious");
    }
    controls.push("[q]uit");
    format!("{} > ", controls.join("  "))
}

fn field(label: &str, value: &str) -> String {
    format!(" {label:<14} {value}\n")
}
