// src/cache.rs

//! Memoized pattern generation.
//!
//! A `PatternCache` maps a descriptor and pixel format to the generated
//! frame. Lookups share a read lock; a miss takes the write lock, checks
//! again, and only then generates, so each key is generated at most once
//! no matter how many threads ask for it at the same time. Entries are
//! inserted whole after generation, and callers always get their own clone
//! of the stored master.

use crate::color::Pixel;
use crate::frame::Frame;
use crate::pattern::PatternDescriptor;
use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-wide cache, created on first use and never torn down.
static GLOBAL: Lazy<PatternCache> = Lazy::new(PatternCache::new);

/// A descriptor together with the pixel format it was generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub descriptor: PatternDescriptor,
    pixel: TypeId,
}

impl CacheKey {
    pub fn new<P: Pixel>(descriptor: PatternDescriptor) -> Self {
        Self {
            descriptor,
            pixel: TypeId::of::<P>(),
        }
    }
}

type Entries = HashMap<CacheKey, Box<dyn Any + Send + Sync>>;

pub struct PatternCache {
    entries: RwLock<Entries>,
    generations: AtomicUsize,
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            generations: AtomicUsize::new(0),
        }
    }

    /// The shared, process-lifetime cache behind [`request_pattern`].
    pub fn global() -> &'static PatternCache {
        &GLOBAL
    }

    /// Returns a copy of the cached frame for `descriptor`, running
    /// `generate` first if no frame exists yet.
    ///
    /// `generate` runs at most once per descriptor and pixel format across
    /// all callers.
    ///
    /// # Panics
    /// Panics if either dimension of `descriptor` is zero.
    pub fn get_or_create<P, F>(&self, descriptor: PatternDescriptor, generate: F) -> Frame<P>
    where
        P: Pixel,
        F: FnOnce(&PatternDescriptor) -> Frame<P>,
    {
        assert!(
            descriptor.width > 0 && descriptor.height > 0,
            "pattern dimensions must be positive, got {}x{}",
            descriptor.width,
            descriptor.height
        );
        let key = CacheKey::new::<P>(descriptor);

        let cached = lookup::<P>(&self.read(), &key);
        if let Some(frame) = cached {
            trace!("Pattern cache hit: {} as {}", descriptor, P::NAME);
            return frame;
        }

        let mut entries = self.write();
        // Another caller may have generated it while we waited for the lock.
        if let Some(frame) = lookup::<P>(&entries, &key) {
            trace!("Pattern cache hit after wait: {} as {}", descriptor, P::NAME);
            return frame;
        }

        debug!("Pattern cache miss: {} as {}", descriptor, P::NAME);
        let frame = generate(&descriptor);
        self.generations.fetch_add(1, Ordering::Relaxed);
        let copy = frame.clone();
        entries.insert(key, Box::new(frame));
        copy
    }

    /// Cached test pattern or blank frame for `descriptor`.
    pub fn pattern<P: Pixel>(&self, descriptor: PatternDescriptor) -> Frame<P> {
        self.get_or_create(descriptor, |d| d.generate())
    }

    /// Number of cached frames.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times a generator has run through this cache.
    pub fn generations(&self) -> usize {
        self.generations.load(Ordering::Relaxed)
    }

    // A generator that panics poisons the lock while holding it, but the map
    // never holds a partial entry, so the data is still sound.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(|poisoned| {
            warn!("Pattern cache lock poisoned by an earlier panic, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(|poisoned| {
            warn!("Pattern cache lock poisoned by an earlier panic, recovering");
            poisoned.into_inner()
        })
    }
}

fn lookup<P: Pixel>(entries: &Entries, key: &CacheKey) -> Option<Frame<P>> {
    entries
        .get(key)
        .and_then(|entry| entry.downcast_ref::<Frame<P>>())
        .cloned()
}

/// Returns an independently owned copy of the `width × height` test pattern.
///
/// # Panics
/// Panics if either dimension is zero.
pub fn request_pattern<P: Pixel>(width: u32, height: u32) -> Frame<P> {
    PatternCache::global().pattern(PatternDescriptor::test_pattern(width, height))
}

/// Returns an independently owned blank `width × height` frame.
///
/// # Panics
/// Panics if either dimension is zero.
pub fn request_blank<P: Pixel>(width: u32, height: u32) -> Frame<P> {
    PatternCache::global().pattern(PatternDescriptor::blank(width, height))
}
