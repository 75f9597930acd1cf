//! Temporal adjacency models.
//!
//! A temporal adjacency model decides whether two time-stamped edges chain
//! into a time-respecting path. After edge `a` reaches a vertex, the vertex
//! stays "active" for a while; an edge `b` leaving that vertex continues the
//! path if it departs no earlier than `a` arrives and the waiting time in
//! between does not exceed the *linger* the model assigns to the pair.
//!
//! | Model | linger | maximum linger |
//! |-------|--------|----------------|
//! | [`Simple`] | 0 | 0 |
//! | [`LimitedWaitingTime`] | `dt` | `dt` |
//! | [`Exponential`] | fresh Exp(`rate`) draw | unbounded |
//! | [`Geometric`] | fresh Geometric(`p`) draw | unbounded |
//!
//! Waiting time follows [`Timestamp::waiting_time`]: on integral clocks the
//! next tick counts as back-to-back.
//!
//! # Randomized models
//!
//! [`Exponential`] and [`Geometric`] own a seeded generator and advance it on
//! every [`TemporalAdjacency::linger`] call. Two instances built with the same
//! seed yield the same sequence for the same call order, and never share
//! state. `linger` takes `&mut self`, so a single instance cannot be queried
//! from several threads without external locking.

use std::fmt;
use std::marker::PhantomData;

use plexus_core::{
    Error, FloatTimestamp, IntegralTimestamp, NetworkEdge, Result, TemporalEdge, Timestamp,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Exp, Geometric as GeometricDistribution};

/// How long a vertex stays active after an edge reaches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Linger<T> {
    /// Active for at most this long.
    Bounded(T),
    /// Active forever.
    Unbounded,
}

impl<T: Timestamp> Linger<T> {
    /// Whether a wait of `wait` is allowed.
    pub fn admits(&self, wait: T) -> bool {
        match self {
            Self::Bounded(limit) => wait <= *limit,
            Self::Unbounded => true,
        }
    }

    /// Whether there is a finite limit.
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded(_))
    }
}

impl<T: fmt::Display> fmt::Display for Linger<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(limit) => write!(f, "{limit}"),
            Self::Unbounded => f.write_str("inf"),
        }
    }
}

/// A temporal adjacency model over edges of type `E`.
pub trait TemporalAdjacency<E: TemporalEdge> {
    /// Linger granted between `a` and `b`.
    ///
    /// Only meaningful when `a` and `b` share a vertex and `b` departs no
    /// earlier than `a` arrives. Randomized models draw a fresh value on every
    /// call.
    fn linger(&mut self, a: &E, b: &E) -> Linger<E::Time>;

    /// Upper bound over every value [`TemporalAdjacency::linger`] can return.
    ///
    /// Used to stop scanning candidate edges early.
    fn maximum_linger(&self) -> Linger<E::Time>;

    /// Whether `b` continues a time-respecting path that arrived through `a`.
    ///
    /// Requires an effect vertex of `a` to be a cause vertex of `b`, `b` to
    /// depart no earlier than `a` arrives, and the waiting time to fit within
    /// `linger(a, b)`.
    fn follows(&mut self, a: &E, b: &E) -> bool {
        let arrival = a.effect_time();
        let departure = b.cause_time();
        if departure < arrival {
            return false;
        }
        if !a.mutated_verts().iter().any(|v| b.is_out_incident(v)) {
            return false;
        }
        let wait = arrival.waiting_time(departure);
        self.linger(a, b).admits(wait)
    }
}

/// Only back-to-back or simultaneous edges chain.
pub struct Simple<E> {
    _edge: PhantomData<fn() -> E>,
}

impl<E: TemporalEdge> Simple<E> {
    /// Create the model.
    pub fn new() -> Self {
        Self { _edge: PhantomData }
    }
}

impl<E: TemporalEdge> Default for Simple<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Simple<E> {
    fn clone(&self) -> Self {
        Self { _edge: PhantomData }
    }
}

impl<E> PartialEq for Simple<E> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<E: NetworkEdge> fmt::Debug for Simple<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simple").field("edge", &E::variant_name()).finish()
    }
}

impl<E> fmt::Display for Simple<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("simple")
    }
}

impl<E: TemporalEdge> TemporalAdjacency<E> for Simple<E> {
    fn linger(&mut self, _a: &E, _b: &E) -> Linger<E::Time> {
        Linger::Bounded(E::Time::ZERO)
    }

    fn maximum_linger(&self) -> Linger<E::Time> {
        Linger::Bounded(E::Time::ZERO)
    }
}

/// Edges chain if the wait between them is at most `dt`.
pub struct LimitedWaitingTime<E: TemporalEdge> {
    dt: E::Time,
    _edge: PhantomData<fn() -> E>,
}

impl<E: TemporalEdge> LimitedWaitingTime<E> {
    /// Create the model.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `dt` is negative (or NaN).
    pub fn new(dt: E::Time) -> Result<Self> {
        if !(dt >= E::Time::ZERO) {
            return Err(Error::invalid_parameter(
                "dt",
                format!("waiting time must be non-negative, got {dt}"),
            ));
        }
        Ok(Self {
            dt,
            _edge: PhantomData,
        })
    }

    /// The maximum waiting time.
    pub fn dt(&self) -> E::Time {
        self.dt
    }
}

impl<E: TemporalEdge> Clone for LimitedWaitingTime<E> {
    fn clone(&self) -> Self {
        Self {
            dt: self.dt,
            _edge: PhantomData,
        }
    }
}

impl<E: TemporalEdge> PartialEq for LimitedWaitingTime<E> {
    fn eq(&self, other: &Self) -> bool {
        self.dt.time_cmp(&other.dt).is_eq()
    }
}

impl<E: TemporalEdge> fmt::Debug for LimitedWaitingTime<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LimitedWaitingTime")
            .field("edge", &E::variant_name())
            .field("dt", &self.dt)
            .finish()
    }
}

impl<E: TemporalEdge> fmt::Display for LimitedWaitingTime<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "limited_waiting_time(dt={})", self.dt)
    }
}

impl<E: TemporalEdge> TemporalAdjacency<E> for LimitedWaitingTime<E> {
    fn linger(&mut self, _a: &E, _b: &E) -> Linger<E::Time> {
        Linger::Bounded(self.dt)
    }

    fn maximum_linger(&self) -> Linger<E::Time> {
        Linger::Bounded(self.dt)
    }
}

/// Linger drawn from an exponential distribution with the given `rate`.
///
/// Floating-point time only.
pub struct Exponential<E> {
    rate: f64,
    seed: u64,
    dist: Exp<f64>,
    rng: ChaCha8Rng,
    _edge: PhantomData<fn() -> E>,
}

impl<E: TemporalEdge> Exponential<E>
where
    E::Time: FloatTimestamp,
{
    /// Create the model with its own generator seeded from `seed`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] unless `rate` is finite and positive.
    pub fn new(rate: f64, seed: u64) -> Result<Self> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(Error::invalid_parameter(
                "rate",
                format!("rate must be finite and positive, got {rate}"),
            ));
        }
        let dist = Exp::new(rate).map_err(|e| Error::invalid_parameter("rate", e.to_string()))?;
        Ok(Self {
            rate,
            seed,
            dist,
            rng: ChaCha8Rng::seed_from_u64(seed),
            _edge: PhantomData,
        })
    }

    /// Rate parameter of the distribution.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl<E> Clone for Exponential<E> {
    fn clone(&self) -> Self {
        Self {
            rate: self.rate,
            seed: self.seed,
            dist: self.dist,
            rng: self.rng.clone(),
            _edge: PhantomData,
        }
    }
}

impl<E> PartialEq for Exponential<E> {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.rate == other.rate && self.seed == other.seed && self.rng == other.rng
    }
}

impl<E: NetworkEdge> fmt::Debug for Exponential<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exponential")
            .field("edge", &E::variant_name())
            .field("rate", &self.rate)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl<E> fmt::Display for Exponential<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exponential(rate={}, seed={})", self.rate, self.seed)
    }
}

impl<E: TemporalEdge> TemporalAdjacency<E> for Exponential<E>
where
    E::Time: FloatTimestamp,
{
    fn linger(&mut self, _a: &E, _b: &E) -> Linger<E::Time> {
        Linger::Bounded(E::Time::from_f64(self.rng.sample(self.dist)))
    }

    fn maximum_linger(&self) -> Linger<E::Time> {
        Linger::Unbounded
    }
}

/// Linger drawn from a geometric distribution with success probability `p`:
/// the number of failed ticks before the first success.
///
/// Integral time only.
pub struct Geometric<E> {
    p: f64,
    seed: u64,
    dist: GeometricDistribution,
    rng: ChaCha8Rng,
    _edge: PhantomData<fn() -> E>,
}

impl<E: TemporalEdge> Geometric<E>
where
    E::Time: IntegralTimestamp,
{
    /// Create the model with its own generator seeded from `seed`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] unless `0 < p <= 1`.
    pub fn new(p: f64, seed: u64) -> Result<Self> {
        if !(p > 0.0 && p <= 1.0) {
            return Err(Error::invalid_parameter(
                "p",
                format!("probability must lie in (0, 1], got {p}"),
            ));
        }
        let dist = GeometricDistribution::new(p)
            .map_err(|e| Error::invalid_parameter("p", e.to_string()))?;
        Ok(Self {
            p,
            seed,
            dist,
            rng: ChaCha8Rng::seed_from_u64(seed),
            _edge: PhantomData,
        })
    }

    /// Success probability of the distribution.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl<E> Clone for Geometric<E> {
    fn clone(&self) -> Self {
        Self {
            p: self.p,
            seed: self.seed,
            dist: self.dist,
            rng: self.rng.clone(),
            _edge: PhantomData,
        }
    }
}

impl<E> PartialEq for Geometric<E> {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.p == other.p && self.seed == other.seed && self.rng == other.rng
    }
}

impl<E: NetworkEdge> fmt::Debug for Geometric<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Geometric")
            .field("edge", &E::variant_name())
            .field("p", &self.p)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl<E> fmt::Display for Geometric<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geometric(p={}, seed={})", self.p, self.seed)
    }
}

impl<E: TemporalEdge> TemporalAdjacency<E> for Geometric<E>
where
    E::Time: IntegralTimestamp,
{
    fn linger(&mut self, _a: &E, _b: &E) -> Linger<E::Time> {
        let ticks: u64 = self.rng.sample(self.dist);
        Linger::Bounded(E::Time::from_u64_saturating(ticks))
    }

    fn maximum_linger(&self) -> Linger<E::Time> {
        Linger::Unbounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectedTemporalEdge, UndirectedTemporalEdge};

    type IntEdge = DirectedTemporalEdge<u32, i64>;
    type FloatEdge = DirectedTemporalEdge<u32, f64>;

    #[test]
    fn test_simple_linger_is_zero() {
        let mut adj = Simple::<IntEdge>::new();
        let a = IntEdge::new(0, 1, 10);
        let b = IntEdge::new(1, 2, 12);

        assert_eq!(adj.linger(&a, &b), Linger::Bounded(0));
        assert_eq!(adj.maximum_linger(), Linger::Bounded(0));
        assert_eq!(adj.to_string(), "simple");
    }

    #[test]
    fn test_simple_follows_back_to_back_only() {
        let mut adj = Simple::<IntEdge>::new();
        let a = IntEdge::new(0, 1, 10);

        assert!(adj.follows(&a, &IntEdge::new(1, 2, 10)));
        assert!(adj.follows(&a, &IntEdge::new(1, 2, 11)));
        assert!(!adj.follows(&a, &IntEdge::new(1, 2, 12)));
        assert!(!adj.follows(&a, &IntEdge::new(1, 2, 9)));
        // no shared vertex
        assert!(!adj.follows(&a, &IntEdge::new(0, 2, 10)));
    }

    #[test]
    fn test_limited_waiting_time() {
        let mut adj = LimitedWaitingTime::<IntEdge>::new(5).unwrap();
        let a = IntEdge::new(0, 1, 0);
        let b = IntEdge::new(1, 2, 100);

        assert_eq!(adj.linger(&a, &b), Linger::Bounded(5));
        assert_eq!(adj.maximum_linger(), Linger::Bounded(5));
        assert_eq!(adj.dt(), 5);
        assert!(adj.follows(&a, &IntEdge::new(1, 2, 6)));
        assert!(!adj.follows(&a, &IntEdge::new(1, 2, 7)));
        assert_eq!(adj.to_string(), "limited_waiting_time(dt=5)");
    }

    #[test]
    fn test_limited_waiting_time_rejects_negative() {
        let err = LimitedWaitingTime::<IntEdge>::new(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "dt", .. }));

        assert!(LimitedWaitingTime::<FloatEdge>::new(f64::NAN).is_err());
        assert!(LimitedWaitingTime::<FloatEdge>::new(0.0).is_ok());
    }

    #[test]
    fn test_undirected_follows_either_endpoint() {
        type Edge = UndirectedTemporalEdge<u32, f64>;
        let mut adj = LimitedWaitingTime::<Edge>::new(1.0).unwrap();
        let a = Edge::new(0, 1, 1.0);

        assert!(adj.follows(&a, &Edge::new(0, 5, 1.5)));
        assert!(adj.follows(&a, &Edge::new(5, 1, 2.0)));
        assert!(!adj.follows(&a, &Edge::new(5, 1, 2.5)));
    }

    #[test]
    fn test_exponential_is_deterministic_per_seed() {
        let mut first = Exponential::<FloatEdge>::new(2.0, 42).unwrap();
        let mut second = Exponential::<FloatEdge>::new(2.0, 42).unwrap();
        let a = FloatEdge::new(0, 1, 0.0);
        let b = FloatEdge::new(1, 2, 1.0);

        for _ in 0..100 {
            let x = first.linger(&a, &b);
            assert_eq!(x, second.linger(&a, &b));
            match x {
                Linger::Bounded(v) => assert!(v >= 0.0),
                Linger::Unbounded => panic!("exponential draws are finite"),
            }
        }
        assert_eq!(first.maximum_linger(), Linger::Unbounded);
    }

    #[test]
    fn test_exponential_draws_vary() {
        let mut adj = Exponential::<FloatEdge>::new(1.0, 7).unwrap();
        let a = FloatEdge::new(0, 1, 0.0);
        let b = FloatEdge::new(1, 2, 1.0);

        let draws: Vec<_> = (0..10).map(|_| adj.linger(&a, &b)).collect();
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_exponential_rejects_bad_rate() {
        assert!(Exponential::<FloatEdge>::new(0.0, 1).is_err());
        assert!(Exponential::<FloatEdge>::new(-2.0, 1).is_err());
        assert!(Exponential::<FloatEdge>::new(f64::INFINITY, 1).is_err());
    }

    #[test]
    fn test_geometric_parameter_domain() {
        for p in [0.0, -0.1, 1.5, f64::NAN] {
            let err = Geometric::<IntEdge>::new(p, 1).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "p", .. }));
        }
        assert!(Geometric::<IntEdge>::new(1.0, 1).is_ok());
    }

    #[test]
    fn test_geometric_certain_success_lingers_zero() {
        let mut adj = Geometric::<IntEdge>::new(1.0, 3).unwrap();
        let a = IntEdge::new(0, 1, 0);
        let b = IntEdge::new(1, 2, 1);

        for _ in 0..20 {
            assert_eq!(adj.linger(&a, &b), Linger::Bounded(0));
        }
        assert_eq!(adj.to_string(), "geometric(p=1, seed=3)");
    }

    #[test]
    fn test_geometric_is_deterministic_per_seed() {
        let mut first = Geometric::<IntEdge>::new(0.3, 11).unwrap();
        let mut second = Geometric::<IntEdge>::new(0.3, 11).unwrap();
        let a = IntEdge::new(0, 1, 0);
        let b = IntEdge::new(1, 2, 1);

        let xs: Vec<_> = (0..100).map(|_| first.linger(&a, &b)).collect();
        let ys: Vec<_> = (0..100).map(|_| second.linger(&a, &b)).collect();
        assert_eq!(xs, ys);
        assert_eq!(first.maximum_linger(), Linger::Unbounded);
        assert!((first.p() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_geometric_draws_vary() {
        let mut adj = Geometric::<IntEdge>::new(0.3, 11).unwrap();
        let a = IntEdge::new(0, 1, 0);
        let b = IntEdge::new(1, 2, 1);

        let draws: Vec<i64> = (0..100)
            .map(|_| match adj.linger(&a, &b) {
                Linger::Bounded(ticks) => ticks,
                Linger::Unbounded => panic!("geometric draws are finite"),
            })
            .collect();

        assert!(draws.iter().all(|&t| t >= 0));
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
        // P(0) = 0.3, so a hundred draws all at zero is out of the question.
        assert!(draws.iter().any(|&t| t > 0));
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut first = Geometric::<IntEdge>::new(0.3, 1).unwrap();
        let mut second = Geometric::<IntEdge>::new(0.3, 2).unwrap();
        let a = IntEdge::new(0, 1, 0);
        let b = IntEdge::new(1, 2, 1);

        let xs: Vec<_> = (0..100).map(|_| first.linger(&a, &b)).collect();
        let ys: Vec<_> = (0..100).map(|_| second.linger(&a, &b)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_clones_are_independent() {
        let mut original = Geometric::<IntEdge>::new(0.3, 11).unwrap();
        let mut copy = original.clone();
        let a = IntEdge::new(0, 1, 0);
        let b = IntEdge::new(1, 2, 1);

        assert_eq!(original, copy);
        let x = original.linger(&a, &b);
        assert_ne!(original, copy);
        assert_eq!(copy.linger(&a, &b), x);
    }

    #[test]
    fn test_linger_admits() {
        assert!(Linger::Bounded(3).admits(3));
        assert!(!Linger::Bounded(3).admits(4));
        assert!(Linger::<i64>::Unbounded.admits(i64::MAX));
        assert_eq!(Linger::<i64>::Unbounded.to_string(), "inf");
    }
}
