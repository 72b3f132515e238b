//! Host-scoped overlay registry
//!
//! Live overlay instances are tracked in a registry value the rendering
//! host owns, with registration tied to mount and removal tied to unmount.
//! There is no process-wide instance map; dropping the registry drops every
//! registration with it.

use std::collections::HashMap;

use thiserror::Error;

use crate::gallery::GalleryEntry;
use crate::layout::types::ContainerSize;

/// Errors that can occur when manipulating the registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An overlay with this id is already mounted
    #[error("overlay id '{id}' is already registered")]
    DuplicateId { id: String },
}

/// A mounted overlay instance
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredOverlay {
    /// The gallery entry this overlay sits on
    pub entry: GalleryEntry,
    /// The container the entry's controls are placed within
    pub container: ContainerSize,
}

impl RegisteredOverlay {
    pub fn new(entry: GalleryEntry, container: ContainerSize) -> Self {
        Self { entry, container }
    }

    /// Whether this overlay's entry accepts controls at all
    pub fn supports_overlays(&self) -> bool {
        self.entry.supports_overlays()
    }
}

/// Registry of live overlay instances, keyed by host-assigned id
#[derive(Debug, Default)]
pub struct OverlayRegistry {
    overlays: HashMap<String, RegisteredOverlay>,
}

impl OverlayRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an overlay at mount time.
    ///
    /// Ids must be unique; re-registering an id without unregistering it
    /// first is an error.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        overlay: RegisteredOverlay,
    ) -> Result<(), RegistryError> {
        let id = id.into();
        if self.overlays.contains_key(&id) {
            return Err(RegistryError::DuplicateId { id });
        }
        self.overlays.insert(id, overlay);
        Ok(())
    }

    /// Remove an overlay at unmount time, returning it if it was present
    pub fn unregister(&mut self, id: &str) -> Option<RegisteredOverlay> {
        self.overlays.remove(id)
    }

    /// Get a registered overlay by id
    pub fn get(&self, id: &str) -> Option<&RegisteredOverlay> {
        self.overlays.get(id)
    }

    /// Whether an id is currently registered
    pub fn contains(&self, id: &str) -> bool {
        self.overlays.contains_key(id)
    }

    /// Number of live registrations
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}
