//! Problem definitions for Decant.
//!
//! Load a complete transfer problem — capacities, start volumes, goal and
//! constraints — from TOML or YAML, then build the core types the solver
//! consumes.
//!
//! # Examples
//!
//! Load a problem from a TOML string:
//!
//! ```
//! use decant_config::ProblemConfig;
//!
//! let config = ProblemConfig::from_toml_str(r#"
//!     capacities = [5, 3]
//!     start = [5, 0]
//!
//!     [goal]
//!     type = "exact_match"
//!     target = [2, 3]
//!
//!     [[constraints]]
//!     type = "max_amount"
//!     limit = 4
//! "#).unwrap();
//!
//! assert_eq!(config.capacities, vec![5, 3]);
//! assert_eq!(config.constraints.len(), 1);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```no_run
//! use decant_config::ProblemConfig;
//!
//! let config = ProblemConfig::load("problem.toml").unwrap();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use decant_core::{
    parse_goal, Capacities, ConstraintSet, EvenDistributionGoal, EvenSendersOnly, ExactMatchGoal,
    ExprParseError, ForbidPair, ForbidReceiving, GoalCondition, MaxAmount, MinAmount,
    SingleContainerGoal, State, StateError,
};

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed YAML.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed goal expression.
    #[error("goal expression error: {0}")]
    Expression(#[from] ExprParseError),

    /// Start volumes violating the capacity invariants.
    #[error("invalid start state: {0}")]
    StartState(#[from] StateError),

    /// Anything else structurally wrong with the configuration.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// A complete transfer problem definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProblemConfig {
    /// Per-container capacity limits.
    pub capacities: Vec<u32>,

    /// Starting volume of each container.
    pub start: Vec<u32>,

    /// The goal to reach.
    #[serde(default)]
    pub goal: Option<GoalConfig>,

    /// Transfer constraints, AND-combined.
    #[serde(default)]
    pub constraints: Vec<ConstraintConfig>,

    /// Depth bound for exhaustive enumeration (unbounded when absent).
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Goal configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GoalConfig {
    /// Every container must match a target volume exactly.
    ExactMatch {
        /// Desired final volumes.
        target: Vec<u32>,
    },
    /// One container must reach a target volume.
    SingleContainer {
        /// Container index.
        index: usize,
        /// Desired volume.
        target: u32,
    },
    /// All containers must hold the same volume.
    EvenDistribution,
    /// A textual goal expression, e.g. `"v[0] + v[1] == 4 && v[2] <= 1"`.
    Expression {
        /// The expression source.
        expression: String,
    },
}

/// Transfer constraint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConstraintConfig {
    /// Forbid pours along one (from, to) pair.
    ForbidPair {
        /// Source container index.
        from: usize,
        /// Destination container index.
        to: usize,
    },
    /// Forbid a container from receiving.
    ForbidReceiving {
        /// Destination container index.
        to: usize,
    },
    /// Cap the volume of a single transfer.
    MaxAmount {
        /// Maximum admitted amount.
        limit: u32,
    },
    /// Require a minimum volume per transfer.
    MinAmount {
        /// Minimum admitted amount.
        minimum: u32,
    },
    /// Only even-indexed containers may send.
    EvenSendersOnly,
}

impl ProblemConfig {
    /// Loads a problem from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads a problem from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a problem from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a problem from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a problem from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks structural consistency beyond what serde enforces.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on empty capacities, start/capacity length
    /// mismatch, or over-capacity start volumes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacities.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one container is required".to_string(),
            ));
        }
        self.start_state()?;
        Ok(())
    }

    /// Returns the capacity vector.
    pub fn capacities(&self) -> Capacities {
        Capacities::new(self.capacities.clone())
    }

    /// Builds the validated start state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::StartState`] if the start volumes violate the
    /// capacity invariants.
    pub fn start_state(&self) -> Result<State, ConfigError> {
        Ok(self.capacities().admit(self.start.clone())?)
    }

    /// Builds the configured goal condition.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when no goal is configured, a referenced
    /// container is out of range, or the goal expression fails to parse.
    pub fn build_goal(&self) -> Result<Box<dyn GoalCondition>, ConfigError> {
        let num_containers = self.capacities.len();
        match &self.goal {
            None => Err(ConfigError::Invalid("no goal configured".to_string())),
            Some(GoalConfig::ExactMatch { target }) => {
                if target.len() != num_containers {
                    return Err(ConfigError::Invalid(format!(
                        "goal target has {} entries but there are {} containers",
                        target.len(),
                        num_containers
                    )));
                }
                Ok(Box::new(ExactMatchGoal::new(target.clone())))
            }
            Some(GoalConfig::SingleContainer { index, target }) => {
                if *index >= num_containers {
                    return Err(ConfigError::Invalid(format!(
                        "goal container index {index} out of range for {num_containers} containers"
                    )));
                }
                Ok(Box::new(SingleContainerGoal::new(*index, *target)))
            }
            Some(GoalConfig::EvenDistribution) => Ok(Box::new(EvenDistributionGoal)),
            Some(GoalConfig::Expression { expression }) => {
                Ok(Box::new(parse_goal(expression, num_containers)?))
            }
        }
    }

    /// Builds the configured constraint set.
    pub fn build_constraints(&self) -> ConstraintSet {
        let mut set = ConstraintSet::new();
        for constraint in &self.constraints {
            match *constraint {
                ConstraintConfig::ForbidPair { from, to } => set.push(ForbidPair::new(from, to)),
                ConstraintConfig::ForbidReceiving { to } => set.push(ForbidReceiving::new(to)),
                ConstraintConfig::MaxAmount { limit } => set.push(MaxAmount::new(limit)),
                ConstraintConfig::MinAmount { minimum } => set.push(MinAmount::new(minimum)),
                ConstraintConfig::EvenSendersOnly => set.push(EvenSendersOnly),
            }
        }
        set
    }
}
