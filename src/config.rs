//! Configuration management for the bookstore saga.
//!
//! Loads configuration from environment variables with defaults that reproduce
//! the standard deployment: one processor `orderprocessor-1`, a charge delay of
//! 0 to 9 whole seconds, and last-spawn-wins on duplicate actor names.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BOOKSTORE_SYSTEM_NAME` | `bookstore` | actor system name |
//! | `BOOKSTORE_PROCESSOR_ID` | `1` | suffix of `orderprocessor-<id>` |
//! | `BOOKSTORE_CHARGE_STEP_MS` | `1000` | length of one charge delay step |
//! | `BOOKSTORE_CHARGE_MAX_STEPS` | `9` | upper bound (inclusive) of delay steps |
//! | `BOOKSTORE_MATCH_MODE` | `strict` | `strict` or `permissive` |
//! | `BOOKSTORE_DUPLICATE_POLICY` | `replace` | `replace` or `reject` |

use crate::error::ConfigError;
use crate::model::{Message, MessageType};
use actor_framework::{DuplicatePolicy, SystemConfig};
use rand::Rng;
use std::env;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;

/// Which messages the account and inventory actors react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Only their own command (`CHARGE_CREDITCARD_CMD` / `SHIP_BOOK_CMD`).
    #[default]
    Strict,
    /// Any message at all. Kept for compatibility with older deployments.
    Permissive,
}

impl MatchMode {
    pub fn accepts(&self, msg: &Message, expected: MessageType) -> bool {
        match self {
            MatchMode::Strict => msg.is(expected),
            MatchMode::Permissive => true,
        }
    }
}

impl FromStr for MatchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(MatchMode::Strict),
            "permissive" => Ok(MatchMode::Permissive),
            _ => Err(ConfigError::UnknownMatchMode(s.to_string())),
        }
    }
}

impl Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Strict => write!(f, "strict"),
            MatchMode::Permissive => write!(f, "permissive"),
        }
    }
}

/// Simulated payment gateway latency: a uniformly random whole number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeDelay {
    pub step: Duration,
    pub max_steps: u32,
}

impl ChargeDelay {
    /// No delay at all. Handy in tests.
    pub const IMMEDIATE: ChargeDelay = ChargeDelay {
        step: Duration::ZERO,
        max_steps: 0,
    };

    /// Draws a delay in `[0, max_steps] * step`.
    pub fn sample(&self) -> Duration {
        let steps = rand::thread_rng().gen_range(0..=self.max_steps);
        self.step.saturating_mul(steps)
    }

    /// The longest delay [`sample`](Self::sample) can return. Saturates at `Duration::MAX`.
    pub fn max(&self) -> Duration {
        self.step.saturating_mul(self.max_steps)
    }
}

impl Default for ChargeDelay {
    fn default() -> Self {
        Self {
            step: Duration::from_secs(1),
            max_steps: 9,
        }
    }
}

/// Full configuration of a bookstore deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct SagaConfig {
    pub system: SystemConfig,
    /// Suffix of the processor's name, `orderprocessor-<processor_id>`.
    pub processor_id: String,
    pub charge_delay: ChargeDelay,
    pub match_mode: MatchMode,
}

impl Default for SagaConfig {
    fn default() -> Self {
        Self {
            system: SystemConfig::new("bookstore"),
            processor_id: "1".to_string(),
            charge_delay: ChargeDelay::default(),
            match_mode: MatchMode::Strict,
        }
    }
}

impl SagaConfig {
    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let step_ms: Option<u64> = parse_var("BOOKSTORE_CHARGE_STEP_MS")?;

        Ok(Self {
            system: SystemConfig {
                name: env::var("BOOKSTORE_SYSTEM_NAME").unwrap_or(defaults.system.name),
                duplicate_policy: parse_var::<DuplicatePolicy>("BOOKSTORE_DUPLICATE_POLICY")?
                    .unwrap_or(defaults.system.duplicate_policy),
                ..defaults.system
            },
            processor_id: env::var("BOOKSTORE_PROCESSOR_ID").unwrap_or(defaults.processor_id),
            charge_delay: ChargeDelay {
                step: step_ms
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.charge_delay.step),
                max_steps: parse_var("BOOKSTORE_CHARGE_MAX_STEPS")?
                    .unwrap_or(defaults.charge_delay.max_steps),
            },
            match_mode: parse_var("BOOKSTORE_MATCH_MODE")?.unwrap_or(defaults.match_mode),
        })
    }

    pub fn with_charge_delay(mut self, charge_delay: ChargeDelay) -> Self {
        self.charge_delay = charge_delay;
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_system_name(mut self, name: impl Into<String>) -> Self {
        self.system.name = name.into();
        self
    }
}

fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(None),
    }
}
