//! # Actor Addresses
//!
//! An [`ActorPath`] names one actor inside one named [`ActorSystem`](crate::ActorSystem).
//! Paths are hierarchical: a child path is its parent's path plus one segment.
//!
//! Paths carry no reference to the actor they name. Holding an `ActorPath` is a
//! *relation*, and turning it into a live mailbox is a *lookup* performed by the
//! system at dispatch time. A path may therefore be stale (the actor was never
//! spawned, or the system shut down), in which case dispatch drops the message.
//!
//! ```rust
//! use actor_framework::ActorPath;
//!
//! let processor = ActorPath::root("shop").child("orderprocessor-1");
//! let order = processor.child("order-42");
//!
//! assert_eq!(order.to_string(), "shop://orderprocessor-1/order-42");
//! assert_eq!(order.parent(), Some(processor));
//! assert_eq!(order.name(), Some("order-42"));
//! ```

use std::fmt::{self, Display};

/// Path-based identifier of an actor within a named system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorPath {
    system: String,
    segments: Vec<String>,
}

impl ActorPath {
    /// The root of a system. Top-level actors are its children.
    pub fn root(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            segments: Vec::new(),
        }
    }

    /// Builds a path from its segments, without consulting any registry.
    pub fn from_segments<I, S>(system: impl Into<String>, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            system: system.into(),
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the path of a direct child named `segment`.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self {
            system: self.system.clone(),
            segments,
        }
    }

    /// The enclosing path, or `None` for the system root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            system: self.system.clone(),
            segments: rest.to_vec(),
        })
    }

    /// Last segment of the path. `None` for the system root.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when `self` is exactly one segment below `parent`.
    pub fn is_child_of(&self, parent: &ActorPath) -> bool {
        self.system == parent.system
            && self.segments.len() == parent.segments.len() + 1
            && self.segments.starts_with(&parent.segments)
    }
}

impl Display for ActorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.system, self.segments.join("/"))
    }
}
