use serde::{Deserialize, Serialize};

/// The signed-in user, used for attribution of tests and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}

/// A row of the bundled phone specification database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneDbItem {
    pub name: String,
    pub cpu: String,
    pub ram: String,
}

/// A phone the user saved to their profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDevice {
    pub id: String,
    pub spec: PhoneDbItem,
}
