//! Serializable description of a temporal adjacency model.
//!
//! ```json
//! { "kind": "limited_waiting_time", "dt": 5.0 }
//! { "kind": "exponential", "rate": 2.0, "seed": 42 }
//! ```
//!
//! A config is resolved against a concrete edge type with
//! [`AdjacencyConfig::build_floating`] or [`AdjacencyConfig::build_integral`],
//! depending on the edge's time domain.

use plexus_core::{Error, FloatTimestamp, IntegralTimestamp, Result, TemporalEdge};
use serde::{Deserialize, Serialize};

use crate::adjacency::{Exponential, Geometric, LimitedWaitingTime, Simple, TemporalAdjacency};

/// A boxed adjacency model chosen at runtime.
pub type DynAdjacency<E> = Box<dyn TemporalAdjacency<E> + Send>;

/// Which adjacency model to use, and its parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdjacencyConfig {
    /// Back-to-back edges only.
    #[default]
    Simple,
    /// Wait at most `dt`.
    LimitedWaitingTime {
        /// Maximum waiting time.
        dt: f64,
    },
    /// Exponentially distributed linger (floating-point time).
    Exponential {
        /// Rate of the distribution.
        rate: f64,
        /// Generator seed.
        seed: u64,
    },
    /// Geometrically distributed linger (integral time).
    Geometric {
        /// Success probability per tick.
        p: f64,
        /// Generator seed.
        seed: u64,
    },
}

impl AdjacencyConfig {
    /// Name of the selected model.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::LimitedWaitingTime { .. } => "limited_waiting_time",
            Self::Exponential { .. } => "exponential",
            Self::Geometric { .. } => "geometric",
        }
    }

    /// Build the model for edges with floating-point time.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for [`AdjacencyConfig::Geometric`], which
    /// needs integral time, or when the model rejects its parameters.
    pub fn build_floating<E>(&self) -> Result<DynAdjacency<E>>
    where
        E: TemporalEdge + 'static,
        E::Time: FloatTimestamp,
    {
        let adj: DynAdjacency<E> = match *self {
            Self::Simple => Box::new(Simple::new()),
            Self::LimitedWaitingTime { dt } => {
                Box::new(LimitedWaitingTime::new(E::Time::from_f64(dt))?)
            }
            Self::Exponential { rate, seed } => Box::new(Exponential::new(rate, seed)?),
            Self::Geometric { .. } => {
                return Err(Error::invalid_parameter(
                    "kind",
                    "geometric adjacency requires integral time",
                ))
            }
        };
        tracing::debug!(kind = self.kind(), edge = E::variant_name(), "built adjacency");
        Ok(adj)
    }

    /// Build the model for edges with integral time.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for [`AdjacencyConfig::Exponential`],
    /// which needs floating-point time, for a `dt` that is not a whole number
    /// representable in the time type, or when the model rejects its
    /// parameters.
    pub fn build_integral<E>(&self) -> Result<DynAdjacency<E>>
    where
        E: TemporalEdge + 'static,
        E::Time: IntegralTimestamp,
    {
        let adj: DynAdjacency<E> = match *self {
            Self::Simple => Box::new(Simple::new()),
            Self::LimitedWaitingTime { dt } => {
                let dt = E::Time::from_f64_exact(dt).ok_or_else(|| {
                    Error::invalid_parameter("dt", format!("{dt} is not a whole tick count"))
                })?;
                Box::new(LimitedWaitingTime::new(dt)?)
            }
            Self::Exponential { .. } => {
                return Err(Error::invalid_parameter(
                    "kind",
                    "exponential adjacency requires floating-point time",
                ))
            }
            Self::Geometric { p, seed } => Box::new(Geometric::new(p, seed)?),
        };
        tracing::debug!(kind = self.kind(), edge = E::variant_name(), "built adjacency");
        Ok(adj)
    }
}
