//! # Runtime Configuration

use crate::error::FrameworkError;
use std::fmt::{self, Display};
use std::str::FromStr;

/// What [`ActorSystem::spawn`](crate::ActorSystem::spawn) does when the path is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Last spawn wins. The previous actor's mailbox is closed; it finishes
    /// the messages already queued and stops.
    #[default]
    Replace,
    /// Refuse the spawn with [`FrameworkError::DuplicateActor`].
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = FrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(DuplicatePolicy::Replace),
            "reject" => Ok(DuplicatePolicy::Reject),
            other => Err(FrameworkError::UnknownPolicy(other.to_string())),
        }
    }
}

impl Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::Replace => write!(f, "replace"),
            DuplicatePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Settings for one [`ActorSystem`](crate::ActorSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Name of the system. Becomes the `system` part of every [`ActorPath`](crate::ActorPath).
    pub name: String,
    pub duplicate_policy: DuplicatePolicy,
    /// Capacity of the [`SystemEvent`](crate::SystemEvent) broadcast channel.
    /// Slow subscribers lose the oldest events once it is exceeded.
    pub event_capacity: usize,
}

impl SystemConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            name: "system".to_string(),
            duplicate_policy: DuplicatePolicy::Replace,
            event_capacity: 256,
        }
    }
}
