//! Viewport intersection tracking.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Axis-aligned rectangle in page coordinates. `y` may be negative once the
/// page is scrolled past an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Area {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        x >= i64::from(self.x)
            && x < i64::from(self.x) + i64::from(self.width)
            && y >= i64::from(self.y)
            && y < i64::from(self.y) + i64::from(self.height)
    }

    fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Fraction of `element` that lies inside `viewport`, in `[0, 1]`.
pub fn intersection_ratio(element: Area, viewport: Area) -> f32 {
    if element.is_empty() {
        return 0.0;
    }

    let left = i64::from(element.x).max(i64::from(viewport.x));
    let top = i64::from(element.y).max(i64::from(viewport.y));
    let right = (i64::from(element.x) + i64::from(element.width))
        .min(i64::from(viewport.x) + i64::from(viewport.width));
    let bottom = (i64::from(element.y) + i64::from(element.height))
        .min(i64::from(viewport.y) + i64::from(viewport.height));

    if right <= left || bottom <= top {
        return 0.0;
    }

    let overlap = ((right - left) * (bottom - top)) as f64;
    (overlap / element.area() as f64) as f32
}

/// Registration handle returned by [`VisibilityObserver::observe`].
/// Disposes the registration when dropped.
#[derive(Debug)]
pub struct Observation {
    live: Arc<AtomicBool>,
}

impl Observation {
    pub fn dispose(&self) {
        self.live.store(false, Ordering::SeqCst);
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.dispose();
    }
}

struct Entry<K> {
    key: K,
    threshold: f32,
    last: Option<bool>,
    live: Arc<AtomicBool>,
}

/// Reports when observed elements cross their visibility threshold.
///
/// Like a browser intersection observer, an element counts as visible when
/// at least `threshold` of its area is inside the viewport, and only changes
/// are reported. The first measurement after `observe` always reports.
pub struct VisibilityObserver<K> {
    entries: Vec<Entry<K>>,
}

impl<K: Clone> Default for VisibilityObserver<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> VisibilityObserver<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn observe(&mut self, key: K, threshold: f32) -> Observation {
        let live = Arc::new(AtomicBool::new(true));
        self.entries.push(Entry {
            key,
            threshold: threshold.clamp(f32::EPSILON, 1.0),
            last: None,
            live: Arc::clone(&live),
        });
        Observation { live }
    }

    /// Measure every live registration against `viewport`.
    ///
    /// `locate` maps a key to the element's current area; `None` means the
    /// element is not laid out and counts as hidden.
    pub fn measure<F>(&mut self, viewport: Area, mut locate: F) -> Vec<(K, bool)>
    where
        F: FnMut(&K) -> Option<Area>,
    {
        self.entries.retain(|e| e.live.load(Ordering::SeqCst));

        let mut changes = Vec::new();
        for entry in &mut self.entries {
            let ratio = locate(&entry.key)
                .map(|area| intersection_ratio(area, viewport))
                .unwrap_or(0.0);
            let visible = ratio >= entry.threshold;
            if entry.last != Some(visible) {
                entry.last = Some(visible);
                changes.push((entry.key.clone(), visible));
            }
        }
        changes
    }

    /// Number of registrations that have not been disposed.
    pub fn observed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.live.load(Ordering::SeqCst))
            .count()
    }
}
