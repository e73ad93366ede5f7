//! Uniform punishment selection and the wheel-angle view mapping.
//!
//! The outcome index is chosen uniformly at spin time; the rotation shown by
//! a view is derived afterwards from the already-chosen index. Views may
//! still map a final rotation back to an index, but that mapping is a
//! presentation detail and never decides the outcome.

use rand::Rng;

use crate::catalog::{Punishment, PunishmentCatalog};

pub const FULL_CIRCLE: f32 = 360.0;
/// Decorative full rotations before the wheel settles.
pub const MIN_FULL_SPINS: u32 = 5;
pub const MAX_FULL_SPINS: u32 = 10;
/// Fraction of a segment kept clear on each side when generating a landing
/// angle, so float rounding can never flip the segment at a boundary.
const SEGMENT_MARGIN: f32 = 0.1;

/// Pick a uniform index into a catalog of `len` entries.
///
/// Returns `None` for an empty catalog.
pub fn pick_index<R: Rng>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.gen_range(0..len))
}

/// Pick a punishment with uniform probability across all entries.
pub fn pick_punishment<'a, R: Rng>(
    catalog: &'a PunishmentCatalog,
    rng: &mut R,
) -> Option<&'a Punishment> {
    pick_index(catalog.len(), rng).and_then(|index| catalog.get(index))
}

/// Angular width of one wheel segment in degrees.
#[must_use]
pub fn segment_angle(len: usize) -> f32 {
    if len == 0 {
        return FULL_CIRCLE;
    }
    FULL_CIRCLE / len as f32
}

/// Map a final wheel rotation (clockwise degrees, pointer at twelve
/// o'clock) to the segment index under the pointer.
///
/// Returns `None` for an empty wheel.
#[must_use]
pub fn index_for_angle(rotation_degrees: f32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let normalized = rotation_degrees.rem_euclid(FULL_CIRCLE);
    let adjusted = (FULL_CIRCLE - normalized).rem_euclid(FULL_CIRCLE);
    let index = (adjusted / segment_angle(len)) as usize;
    // Guard the floating-point edge at exactly 360 degrees.
    Some(index.min(len - 1))
}

/// Produce a decorative rotation that lands the pointer inside the
/// pre-chosen segment: several full turns plus an angle strictly inside the
/// segment, away from its boundaries.
pub fn rotation_for_index<R: Rng>(index: usize, len: usize, rng: &mut R) -> f32 {
    if len == 0 || index >= len {
        return 0.0;
    }
    let segment = segment_angle(len);
    let within = segment * rng.gen_range(SEGMENT_MARGIN..=1.0 - SEGMENT_MARGIN);
    let landing = index as f32 * segment + within;
    let full_spins = rng.gen_range(MIN_FULL_SPINS..=MAX_FULL_SPINS);
    full_spins as f32 * FULL_CIRCLE + (FULL_CIRCLE - landing)
}
