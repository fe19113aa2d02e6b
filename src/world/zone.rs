// zone.rs - Room zones and wall queries
//
// The floor plan on the XZ plane: an interior room whose front wall sits
// at `door_wall_z`, and a larger exterior yard past it. Z is depth (into
// the room is -Z), X is lateral.

use glam::Vec3;

use crate::scene::BoundsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Interior,
    Exterior,
}

/// Which side of the door wall a depth coordinate is on.
/// The wall plane itself counts as exterior.
#[inline]
pub fn zone_of(b: &BoundsConfig, z: f32) -> Zone {
    if z < b.door_wall_z { Zone::Interior } else { Zone::Exterior }
}

/// True if moving from `prev_z` to `z` passes through the door wall.
///
/// Starting exactly on the plane never counts as a crossing.
#[inline]
pub fn crosses_door_wall(b: &BoundsConfig, prev_z: f32, z: f32) -> bool {
    let wall = b.door_wall_z;
    (prev_z < wall && z >= wall) || (prev_z > wall && z <= wall)
}

/// True if the lateral coordinate lies inside the doorway opening.
#[inline]
pub fn in_aperture(b: &BoundsConfig, x: f32) -> bool {
    x.abs() < b.aperture_half_width
}

/// Clamp a position to the zone its depth coordinate falls in.
///
/// The interior has no clamp toward the door wall: crossing that plane
/// is handled by the wall check, not here.
pub fn clamp_to_zone(b: &BoundsConfig, mut p: Vec3) -> Vec3 {
    match zone_of(b, p.z) {
        Zone::Interior => {
            p.x = p.x.clamp(-b.inner, b.inner);
            p.z = p.z.max(-b.inner);
        }
        Zone::Exterior => {
            p.x = p.x.clamp(-b.outer, b.outer);
            p.z = p.z.clamp(-b.outer, b.outer);
        }
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> BoundsConfig {
        BoundsConfig::default()
    }

    #[test]
    fn wall_plane_is_exterior() {
        let b = bounds();
        assert_eq!(zone_of(&b, 9.999), Zone::Interior);
        assert_eq!(zone_of(&b, 10.0), Zone::Exterior);
    }

    #[test]
    fn crossing_is_detected_both_ways() {
        let b = bounds();
        assert!(crosses_door_wall(&b, 9.9, 10.0));
        assert!(crosses_door_wall(&b, 10.1, 10.0));
        assert!(crosses_door_wall(&b, 10.1, 9.9));
        assert!(!crosses_door_wall(&b, 9.8, 9.9));
        assert!(!crosses_door_wall(&b, 10.0, 9.9));
    }

    #[test]
    fn aperture_is_open_interval() {
        let b = bounds();
        assert!(in_aperture(&b, 0.0));
        assert!(in_aperture(&b, -1.49));
        assert!(!in_aperture(&b, 1.5));
    }

    #[test]
    fn interior_clamps_sides_and_back_only() {
        let b = bounds();
        let p = clamp_to_zone(&b, Vec3::new(12.0, 1.7, -15.0));
        assert_eq!(p, Vec3::new(9.5, 1.7, -9.5));

        let near_wall = clamp_to_zone(&b, Vec3::new(-3.0, 1.7, 9.99));
        assert_eq!(near_wall.z, 9.99);
    }

    #[test]
    fn exterior_clamps_to_outer_square() {
        let b = bounds();
        let p = clamp_to_zone(&b, Vec3::new(-25.0, 1.7, 30.0));
        assert_eq!(p, Vec3::new(-20.0, 1.7, 20.0));
    }
}
