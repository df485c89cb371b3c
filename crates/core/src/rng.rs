//! Shape sources - where the next piece comes from
//!
//! The session only asks for "the next shape id". [`SimpleRng`] is a seeded
//! LCG drawing uniformly over the seven shapes (deterministic for tests and
//! replays); [`ShapeSequence`] replays a fixed script.

use crate::types::ShapeId;

/// Supplier of shape ids for spawning.
///
/// Each of the seven ids must be reachable; nothing else about the
/// distribution is assumed.
pub trait ShapeSource {
    fn next_shape_id(&mut self) -> ShapeId;
}

impl<S: ShapeSource + ?Sized> ShapeSource for &mut S {
    fn next_shape_id(&mut self) -> ShapeId {
        (**self).next_shape_id()
    }
}

impl<S: ShapeSource + ?Sized> ShapeSource for Box<S> {
    fn next_shape_id(&mut self) -> ShapeId {
        (**self).next_shape_id()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would be a fixed point of the multiply, keep it away.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform-ish value in `[0, max)` from the high bits (the low bits of an LCG cycle quickly).
    pub fn next_range(&mut self, max: u32) -> u32 {
        assert!(max > 0, "empty range");
        (self.next_u32() >> 16) % max
    }

    /// Current generator state; feeding it to [`SimpleRng::new`] continues the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for SimpleRng {
    fn next_shape_id(&mut self) -> ShapeId {
        ShapeId::ALL[self.next_range(ShapeId::ALL.len() as u32) as usize]
    }
}

/// Scripted source cycling through a fixed list of shapes.
#[derive(Debug, Clone)]
pub struct ShapeSequence {
    shapes: Vec<ShapeId>,
    pos: usize,
}

impl ShapeSequence {
    /// # Panics
    ///
    /// If `shapes` is empty.
    pub fn new(shapes: impl Into<Vec<ShapeId>>) -> Self {
        let shapes = shapes.into();
        assert!(!shapes.is_empty(), "shape sequence needs at least one shape");
        Self { shapes, pos: 0 }
    }

    /// The same shape forever.
    pub fn repeat(shape: ShapeId) -> Self {
        Self::new(vec![shape])
    }
}

impl ShapeSource for ShapeSequence {
    fn next_shape_id(&mut self) -> ShapeId {
        let shape = self.shapes[self.pos];
        self.pos = (self.pos + 1) % self.shapes.len();
        shape
    }
}
