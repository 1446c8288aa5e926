// Ingestion limits to harden the diagram against untrusted input

// Scene size caps
pub const MAX_LINES: usize = 4_096;
pub const MAX_CIRCLES: usize = 4_096;
pub const MAX_POINTS: usize = 16_384;
pub const MAX_REGIONS: usize = 65_536;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 = 10_000_000.0;
pub const RADIUS_MAX: f64 = 10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_radius_bounds(r: f64) -> bool { r.is_finite() && r > 0.0 && r <= RADIUS_MAX }
