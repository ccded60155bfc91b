//! Job-profile persistence.
//!
//! Handlers never touch storage directly: they depend on the
//! `ProfileStore` trait, carried in `AppState` as `Arc<dyn ProfileStore>`,
//! so the backing store can be swapped without touching endpoint code.
//! The default backend keeps custom profiles in a JSON file; built-in
//! profiles are compiled into the binary and can never be shadowed,
//! updated, or deleted.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::errors::AppError;
use crate::profiles::models::JobProfile;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn all(&self) -> Vec<JobProfile>;
    async fn get(&self, id: &str) -> Option<JobProfile>;
    async fn categories(&self) -> Vec<String>;
    async fn create(&self, profile: JobProfile) -> Result<JobProfile, AppError>;
    async fn update(&self, id: &str, profile: JobProfile) -> Result<JobProfile, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

/// Built-in profiles shipped with the binary. Deployments start empty and
/// add their own through the API.
fn built_in_profiles() -> Vec<JobProfile> {
    Vec::new()
}

/// JSON-file-backed store. Custom profiles live in a `{id -> profile}` map
/// on disk, loaded once at startup and rewritten on every mutation.
pub struct JsonProfileStore {
    path: PathBuf,
    built_in: Vec<JobProfile>,
    custom: RwLock<BTreeMap<String, JobProfile>>,
}

impl JsonProfileStore {
    /// Loads the store. A missing file means no custom profiles yet; a
    /// corrupt file is logged and treated the same so the service still
    /// starts.
    pub fn load(path: PathBuf) -> Self {
        let custom = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, JobProfile>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Error loading custom profiles from {}: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self {
            path,
            built_in: built_in_profiles(),
            custom: RwLock::new(custom),
        }
    }

    fn is_built_in(&self, id: &str) -> bool {
        self.built_in.iter().any(|p| p.id == id)
    }

    fn persist(&self, custom: &BTreeMap<String, JobProfile>) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(custom)
            .context("Failed to serialize custom profiles")?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create profile directory {}", parent.display())
                })?;
            }
        }

        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write custom profiles to {}", self.path.display()))
    }
}

#[async_trait]
impl ProfileStore for JsonProfileStore {
    async fn all(&self) -> Vec<JobProfile> {
        let custom = self.custom.read().await;
        self.built_in
            .iter()
            .cloned()
            .chain(custom.values().cloned())
            .collect()
    }

    async fn get(&self, id: &str) -> Option<JobProfile> {
        if let Some(profile) = self.built_in.iter().find(|p| p.id == id) {
            return Some(profile.clone());
        }
        self.custom.read().await.get(id).cloned()
    }

    async fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.all().await.into_iter().map(|p| p.category).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    async fn create(&self, profile: JobProfile) -> Result<JobProfile, AppError> {
        if self.is_built_in(&profile.id) {
            return Err(AppError::Validation(format!(
                "Profile id '{}' conflicts with a built-in profile. Please use a different id.",
                profile.id
            )));
        }

        let mut custom = self.custom.write().await;
        custom.insert(profile.id.clone(), profile.clone());
        self.persist(&custom)?;
        Ok(profile)
    }

    async fn update(&self, id: &str, profile: JobProfile) -> Result<JobProfile, AppError> {
        if self.is_built_in(id) {
            return Err(AppError::Forbidden(
                "Built-in job profiles cannot be updated".to_string(),
            ));
        }

        let mut custom = self.custom.write().await;
        if !custom.contains_key(id) {
            return Err(AppError::NotFound(format!(
                "Custom profile '{id}' not found"
            )));
        }
        custom.insert(id.to_string(), profile.clone());
        self.persist(&custom)?;
        Ok(profile)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if self.is_built_in(id) {
            return Err(AppError::Forbidden(
                "Built-in job profiles cannot be deleted".to_string(),
            ));
        }

        let mut custom = self.custom.write().await;
        if custom.remove(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Custom profile '{id}' not found"
            )));
        }
        self.persist(&custom)?;
        Ok(())
    }
}
