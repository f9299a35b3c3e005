use super::StorageBackend;
use crate::error::{MorentError, Result};

/// In-memory storage slot for testing logic without filesystem I/O.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    slot: Option<String>,
    fail_writes: bool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot, simulating a previous session's payload.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
            fail_writes: false,
        }
    }

    /// A backend whose writes always fail, for exercising the fail-soft
    /// persistence policy.
    pub fn failing() -> Self {
        Self {
            slot: None,
            fail_writes: true,
        }
    }

    pub fn payload(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl StorageBackend for InMemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.slot.clone())
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        if self.fail_writes {
            return Err(MorentError::Storage("simulated write failure".to_string()));
        }
        self.slot = Some(payload.to_string());
        Ok(())
    }
}
