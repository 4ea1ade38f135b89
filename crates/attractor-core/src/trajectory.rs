//! Fixed-capacity trajectory with per-point tangents.
//!
//! Points live in a mirrored ring: storage holds `2 * capacity` slots and every
//! write lands in slot `s` and its mirror `s + capacity`. The chronological
//! window (oldest first) is therefore always one contiguous slice, so the
//! renderer can draw it as a single line strip while eviction stays O(1).

use crate::constants::MIN_CAPACITY;
use crate::error::ConfigError;
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct TrajectoryStore {
    capacity: usize,
    points: Vec<Vec3>,
    tangents: Vec<Vec3>,
    len: usize,
    // ring slot receiving the next point, in [0, capacity)
    head: usize,
    total_appended: u64,
}

impl TrajectoryStore {
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity < MIN_CAPACITY {
            return Err(ConfigError::CapacityTooSmall { capacity });
        }
        Ok(Self {
            capacity,
            points: vec![Vec3::ZERO; capacity * 2],
            tangents: vec![Vec3::ZERO; capacity * 2],
            len: 0,
            head: 0,
            total_appended: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Number of points ever appended, evicted ones included.
    pub fn total_appended(&self) -> u64 {
        self.total_appended
    }

    /// Append a point, evicting the oldest once the store is full.
    ///
    /// The new point's tangent starts as zero until
    /// [`update_newest_tangent`](Self::update_newest_tangent) runs.
    pub fn append(&mut self, point: Vec3) {
        let slot = self.head;
        self.write_slot(slot, point, Vec3::ZERO);
        self.head = (self.head + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
            if self.len == self.capacity {
                log::debug!(
                    "[trajectory] reached capacity {}, evicting oldest from now on",
                    self.capacity
                );
            }
        }
        self.total_appended += 1;
    }

    /// Recompute the tangent of the newest segment.
    ///
    /// The unit direction from the second-newest to the newest point is written
    /// into both of their tangent slots. A zero-length segment yields a zero
    /// tangent. Older tangents are never touched.
    pub fn update_newest_tangent(&mut self) {
        if self.len < 2 {
            return;
        }
        let newest = self.slot_of(self.len - 1);
        let previous = self.slot_of(self.len - 2);
        let delta = self.points[newest] - self.points[previous];
        let length = delta.length();
        let length = if length == 0.0 { 1.0 } else { length };
        let tangent = delta / length;
        self.write_tangent(newest, tangent);
        self.write_tangent(previous, tangent);
    }

    /// Points in chronological order, oldest first.
    ///
    /// Valid until the next [`append`](Self::append).
    pub fn points_view(&self) -> &[Vec3] {
        &self.points[self.window()]
    }

    /// Tangents parallel to [`points_view`](Self::points_view).
    pub fn tangents_view(&self) -> &[Vec3] {
        &self.tangents[self.window()]
    }

    pub fn newest(&self) -> Option<Vec3> {
        self.points_view().last().copied()
    }

    fn window(&self) -> std::ops::Range<usize> {
        let start = if self.is_full() { self.head } else { 0 };
        start..start + self.len
    }

    // Ring slot of the `index`-th point in chronological order.
    #[inline]
    fn slot_of(&self, index: usize) -> usize {
        let start = if self.is_full() { self.head } else { 0 };
        (start + index) % self.capacity
    }

    #[inline]
    fn write_slot(&mut self, slot: usize, point: Vec3, tangent: Vec3) {
        self.points[slot] = point;
        self.points[slot + self.capacity] = point;
        self.write_tangent(slot, tangent);
    }

    #[inline]
    fn write_tangent(&mut self, slot: usize, tangent: Vec3) {
        self.tangents[slot] = tangent;
        self.tangents[slot + self.capacity] = tangent;
    }
}
