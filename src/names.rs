use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::Identity;

/// Best-known display name per login, accumulated across all records seen.
/// Last write wins; names for a login are expected to be stable within a run.
#[derive(Debug, Default, Serialize)]
pub struct NameRegistry(BTreeMap<String, String>);

impl NameRegistry {
  pub fn record(&mut self, identity: &Identity) {
    if let Some(name) = &identity.display_name {
      if !name.is_empty() {
        self.0.insert(identity.login.clone(), name.clone());
      }
    }
  }

  pub fn display_name(&self, login: &str) -> Option<&str> {
    self.0.get(login).map(String::as_str)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}
