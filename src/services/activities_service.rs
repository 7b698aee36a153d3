use std::collections::HashMap;

use tracing::info;

use crate::models::Activity;
use crate::store::{Roster, RosterError};

/// Full roster snapshot for the list endpoint. No filtering or pagination.
pub fn list_activities(roster: &Roster) -> HashMap<String, Activity> {
    roster.snapshot()
}

pub fn signup_for_activity(
    roster: &Roster,
    activity_name: &str,
    email: &str,
) -> Result<String, RosterError> {
    roster.signup(activity_name, email)?;
    info!(activity = %activity_name, email = %email, "participant signed up");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub fn unregister_from_activity(
    roster: &Roster,
    activity_name: &str,
    email: &str,
) -> Result<String, RosterError> {
    roster.unregister(activity_name, email)?;
    info!(activity = %activity_name, email = %email, "participant unregistered");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
