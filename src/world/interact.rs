//! Target selection for interact overlaps

use glam::Vec3;

/// Nearest candidate to `origin`. Ties keep the earlier candidate.
pub fn closest_interactable<'a, T>(
    origin: Vec3,
    candidates: &'a [T],
    position: impl Fn(&T) -> Vec3,
) -> Option<&'a T> {
    candidates.iter().min_by(|a, b| {
        let da = origin.distance_squared(position(a));
        let db = origin.distance_squared(position(b));
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest() {
        let items = [("far", Vec3::new(10.0, 0.0, 0.0)), ("near", Vec3::new(0.0, 0.0, 2.0))];
        let picked = closest_interactable(Vec3::ZERO, &items, |(_, p)| *p);
        assert_eq!(picked.map(|(name, _)| *name), Some("near"));
    }

    #[test]
    fn test_closest_empty() {
        let items: [Vec3; 0] = [];
        assert!(closest_interactable(Vec3::ZERO, &items, |p| *p).is_none());
    }

    #[test]
    fn test_tie_keeps_first() {
        let items = [Vec3::X, -Vec3::X];
        let picked = closest_interactable(Vec3::ZERO, &items, |p| *p);
        assert_eq!(picked, Some(&Vec3::X));
    }
}
