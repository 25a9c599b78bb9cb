use tracing::info;

use super::error::StorageError;
use super::stores::AuthProvider;
use crate::model::{UserProfile, validate_name};

/// In-process auth provider holding the signed-in user, if any.
#[derive(Debug, Clone, Default)]
pub struct LocalAuth {
    user: Option<UserProfile>,
}

impl LocalAuth {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuthProvider for LocalAuth {
    fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    fn sign_in(&mut self, user: UserProfile) {
        info!(uid = %user.uid, "signed in");
        self.user = Some(user);
    }

    fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(uid = %user.uid, "signed out");
        }
    }

    fn update_display_name(&mut self, name: &str) -> Result<(), StorageError> {
        let name = validate_name(name)?;
        let user = self.user.as_mut().ok_or(StorageError::NotSignedIn)?;
        user.display_name = name;
        Ok(())
    }
}
