//! Fixed-capacity object pool.
//!
//! Slots are allocated once and reused. Spawning claims the first inactive
//! slot in index order; a full pool drops the spawn. Inactive slots keep
//! stale data and are never exposed through the active iterators.
//!
//! A slot spawned during a tick is "fresh" until the next pass over the
//! pool. The engine ages pools with the `*_settled` variants so a shot
//! fired this tick stays at its spawn position until the following tick.

use glam::Vec2;

/// One reusable pool entry.
#[derive(Debug, Clone, Default)]
pub struct Slot<P> {
    pub active: bool,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Seconds until the slot retires.
    pub ttl: f32,
    pub payload: P,
    fresh: bool,
}

#[derive(Debug, Clone)]
pub struct ObjectPool<P> {
    slots: Vec<Slot<P>>,
}

impl<P: Default + Clone> ObjectPool<P> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::default(); capacity],
        }
    }
}

impl<P> ObjectPool<P> {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    /// Active slots in index order.
    pub fn iter_active(&self) -> impl Iterator<Item = &Slot<P>> {
        self.slots.iter().filter(|s| s.active)
    }

    /// Claim the first free slot. Returns false when the pool is full.
    pub fn spawn(&mut self, position: Vec2, velocity: Vec2, ttl: f32, payload: P) -> bool {
        let Some(slot) = self.slots.iter_mut().find(|s| !s.active) else {
            return false;
        };
        *slot = Slot {
            active: true,
            position,
            velocity,
            ttl,
            payload,
            fresh: true,
        };
        true
    }

    /// Count down every active slot by `dt`. Slots reaching `ttl <= 0`
    /// retire this tick; the rest are handed to `advance`.
    pub fn age<F>(&mut self, dt: f32, advance: F)
    where
        F: FnMut(&mut Slot<P>),
    {
        self.age_inner(dt, true, advance);
    }

    /// Like [`ObjectPool::age`], but slots spawned since the previous pass
    /// are only marked settled, not aged or advanced.
    pub fn age_settled<F>(&mut self, dt: f32, advance: F)
    where
        F: FnMut(&mut Slot<P>),
    {
        self.age_inner(dt, false, advance);
    }

    fn age_inner<F>(&mut self, dt: f32, include_fresh: bool, mut advance: F)
    where
        F: FnMut(&mut Slot<P>),
    {
        for slot in self.slots.iter_mut().filter(|s| s.active) {
            let fresh = std::mem::take(&mut slot.fresh);
            if fresh && !include_fresh {
                continue;
            }
            slot.ttl -= dt;
            if slot.ttl <= 0.0 {
                slot.active = false;
                continue;
            }
            advance(slot);
        }
    }

    /// Plain ballistic update: age, then `position += velocity * dt`.
    pub fn update(&mut self, dt: f32) {
        self.age(dt, |slot| slot.position += slot.velocity * dt);
    }

    /// Ballistic update that leaves this tick's spawns in place.
    pub fn update_settled(&mut self, dt: f32) {
        self.age_settled(dt, |slot| slot.position += slot.velocity * dt);
    }

    /// Mark every slot settled so the next `*_settled` pass processes it.
    pub fn settle(&mut self) {
        for slot in &mut self.slots {
            slot.fresh = false;
        }
    }

    /// Deactivate every slot.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_at(pool: &mut ObjectPool<u8>, x: f32, ttl: f32, tag: u8) -> bool {
        pool.spawn(Vec2::new(x, 0.0), Vec2::new(10.0, 0.0), ttl, tag)
    }

    #[test]
    fn test_spawn_on_full_pool_is_noop() {
        let mut pool = ObjectPool::<u8>::new(3);
        for i in 0..3 {
            assert!(spawn_at(&mut pool, 0.0, 1.0, i));
        }
        assert_eq!(pool.active_count(), 3);
        assert!(!spawn_at(&mut pool, 0.0, 1.0, 9));
        assert_eq!(pool.active_count(), 3);
        assert!(pool.iter_active().all(|s| s.payload != 9));
    }

    #[test]
    fn test_spawn_is_first_fit() {
        let mut pool = ObjectPool::<u8>::new(4);
        spawn_at(&mut pool, 0.0, 0.5, 0);
        spawn_at(&mut pool, 0.0, 2.0, 1);
        spawn_at(&mut pool, 0.0, 0.5, 2);
        // Slots 0 and 2 retire; slot 1 stays.
        pool.update(1.0);
        assert_eq!(pool.active_count(), 1);

        spawn_at(&mut pool, 0.0, 1.0, 7);
        // Lowest free index gets the new entry, not the one after slot 2.
        assert!(pool.slots[0].active);
        assert_eq!(pool.slots[0].payload, 7);
        assert!(!pool.slots[2].active);
    }

    #[test]
    fn test_ttl_reaching_exactly_zero_retires() {
        let mut pool = ObjectPool::<u8>::new(1);
        spawn_at(&mut pool, 0.0, 0.25, 0);
        pool.update(0.125);
        assert_eq!(pool.active_count(), 1);
        pool.update(0.125);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_update_integrates_position() {
        let mut pool = ObjectPool::<u8>::new(2);
        spawn_at(&mut pool, 5.0, 1.0, 0);
        pool.update(0.5);
        let slot = pool.iter_active().next().unwrap();
        assert_eq!(slot.position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_retired_slot_does_not_move() {
        let mut pool = ObjectPool::<u8>::new(1);
        spawn_at(&mut pool, 5.0, 0.5, 0);
        pool.update(0.5);
        assert_eq!(pool.slots[0].position, Vec2::new(5.0, 0.0));
        assert_eq!(pool.iter_active().count(), 0);
    }

    #[test]
    fn test_settled_pass_skips_fresh_spawns_once() {
        let mut pool = ObjectPool::<u8>::new(2);
        spawn_at(&mut pool, 5.0, 1.0, 0);
        pool.update_settled(0.5);
        let slot = pool.iter_active().next().unwrap();
        assert_eq!(slot.position, Vec2::new(5.0, 0.0));
        assert_eq!(slot.ttl, 1.0);

        pool.update_settled(0.5);
        let slot = pool.iter_active().next().unwrap();
        assert_eq!(slot.position, Vec2::new(10.0, 0.0));
        assert_eq!(slot.ttl, 0.5);
    }

    #[test]
    fn test_settle_makes_spawns_eligible() {
        let mut pool = ObjectPool::<u8>::new(1);
        spawn_at(&mut pool, 0.0, 0.5, 0);
        pool.settle();
        pool.update_settled(0.5);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut pool = ObjectPool::<u8>::new(2);
        spawn_at(&mut pool, 0.0, 1.0, 0);
        spawn_at(&mut pool, 0.0, 1.0, 1);
        pool.clear();
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.capacity(), 2);
    }
}
