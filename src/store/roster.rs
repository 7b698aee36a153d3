use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

// Shared handle to the activity table. Cloning is cheap; every clone sees the
// same underlying map.
#[derive(Clone)]
pub struct Roster {
    activities: Arc<RwLock<HashMap<String, Activity>>>,
}

impl Roster {
    pub fn new(activities: HashMap<String, Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    pub fn with_seed_data() -> Self {
        Self::new(super::seed::seed_activities())
    }

    pub fn len(&self) -> usize {
        self.activities.read().expect("roster lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full copy of the activity table, for the list endpoint.
    pub fn snapshot(&self) -> HashMap<String, Activity> {
        self.activities
            .read()
            .expect("roster lock poisoned")
            .clone()
    }

    /// Append `email` to the activity's participant list.
    ///
    /// The whole check-then-append runs under one write lock, so a duplicate
    /// can never slip in between the membership check and the push. Capacity
    /// is advisory: signup does not check `max_participants`.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write().expect("roster lock poisoned");
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RosterError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the activity's participant list.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write().expect("roster lock poisoned");
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotSignedUp);
        };
        activity.participants.remove(pos);
        Ok(())
    }
}
