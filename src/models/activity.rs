use serde::{Deserialize, Serialize};

// One extracurricular offering. Keyed by its human-readable name in the
// roster map, so the name itself is not a field here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}
