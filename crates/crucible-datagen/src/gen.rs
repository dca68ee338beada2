//! Core generator trait and combinators.
//!
//! Inspired by property-testing strategy types, but aimed at volume
//! data generation rather than shrinking: a generator is a recipe that
//! turns engine draws into values, and combinators compose recipes
//! without touching the draw stream's determinism.

use crucible_core::MersenneTwister;
use std::marker::PhantomData;

/// A recipe producing values of type `T` from the engine's stream.
///
/// Generators hold configuration, never engine state, so one generator
/// can serve many engines (one per worker) concurrently — hence the
/// `Send + Sync` bound.
pub trait Generator<T>: Send + Sync {
    /// Generate a single value using the provided engine.
    fn generate(&self, rng: &mut MersenneTwister) -> T;

    /// Generate `n` values into a `Vec`.
    fn generate_n(&self, rng: &mut MersenneTwister, n: usize) -> Vec<T> {
        (0..n).map(|_| self.generate(rng)).collect()
    }
}

/// Combinator methods for generators.
pub trait GeneratorExt<T>: Generator<T> + Sized {
    /// Transform the generated value with a function.
    fn map<U, F>(self, f: F) -> Map<Self, F, T>
    where
        F: Fn(T) -> U + Send + Sync,
    {
        Map {
            inner: self,
            f,
            _marker: PhantomData,
        }
    }

    /// Retry until the predicate passes, up to a bounded retry count.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: Fn(&T) -> bool + Send + Sync,
    {
        Filter {
            inner: self,
            predicate,
            max_retries: 100,
        }
    }

    /// Generate a value, then use it to pick the next generator.
    fn flat_map<U, G, F>(self, f: F) -> FlatMap<Self, F, T, G>
    where
        G: Generator<U>,
        F: Fn(T) -> G + Send + Sync,
    {
        FlatMap {
            inner: self,
            f,
            _marker: PhantomData,
        }
    }

    /// Box this generator for dynamic dispatch.
    fn boxed(self) -> BoxedGenerator<T>
    where
        Self: 'static,
        T: 'static,
    {
        Box::new(self)
    }
}

impl<T, G: Generator<T> + Sized> GeneratorExt<T> for G {}

/// Boxed generator for dynamic dispatch.
pub type BoxedGenerator<T> = Box<dyn Generator<T>>;

impl<T> Generator<T> for BoxedGenerator<T> {
    fn generate(&self, rng: &mut MersenneTwister) -> T {
        (**self).generate(rng)
    }
}

impl<T> Generator<T> for &BoxedGenerator<T> {
    fn generate(&self, rng: &mut MersenneTwister) -> T {
        (**self).generate(rng)
    }
}

/// Map combinator.
pub struct Map<G, F, T> {
    inner: G,
    f: F,
    // fn pointer marker keeps auto traits independent of T
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, U, G, F> Generator<U> for Map<G, F, T>
where
    G: Generator<T>,
    F: Fn(T) -> U + Send + Sync,
{
    fn generate(&self, rng: &mut MersenneTwister) -> U {
        (self.f)(self.inner.generate(rng))
    }
}

/// Filter combinator with a retry bound.
pub struct Filter<G, F> {
    inner: G,
    predicate: F,
    max_retries: usize,
}

impl<T, G, F> Generator<T> for Filter<G, F>
where
    G: Generator<T>,
    F: Fn(&T) -> bool + Send + Sync,
{
    fn generate(&self, rng: &mut MersenneTwister) -> T {
        for _ in 0..self.max_retries {
            let value = self.inner.generate(rng);
            if (self.predicate)(&value) {
                return value;
            }
        }
        panic!("filter exceeded {} retries", self.max_retries);
    }
}

/// FlatMap combinator.
pub struct FlatMap<G, F, T, H> {
    inner: G,
    f: F,
    _marker: PhantomData<fn(T) -> H>,
}

impl<T, U, G, H, F> Generator<U> for FlatMap<G, F, T, H>
where
    G: Generator<T>,
    H: Generator<U>,
    F: Fn(T) -> H + Send + Sync,
{
    fn generate(&self, rng: &mut MersenneTwister) -> U {
        let next = (self.f)(self.inner.generate(rng));
        next.generate(rng)
    }
}

/// Constant value generator.
#[derive(Clone)]
pub struct Constant<T>(pub T);

impl<T: Clone + Send + Sync> Generator<T> for Constant<T> {
    fn generate(&self, _rng: &mut MersenneTwister) -> T {
        self.0.clone()
    }
}

/// Generator from a closure.
pub struct ClosureGenerator<F> {
    f: F,
}

impl<T, F> Generator<T> for ClosureGenerator<F>
where
    F: Fn(&mut MersenneTwister) -> T + Send + Sync,
{
    fn generate(&self, rng: &mut MersenneTwister) -> T {
        (self.f)(rng)
    }
}

/// Build a generator from a closure.
pub fn from_fn<T, F>(f: F) -> ClosureGenerator<F>
where
    F: Fn(&mut MersenneTwister) -> T + Send + Sync,
{
    ClosureGenerator { f }
}
