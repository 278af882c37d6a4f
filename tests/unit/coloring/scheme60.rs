//! Tests for radial 60/30/10 zoning

#[cfg(test)]
mod tests {
    use hexcluster::algorithm::selection::RandomSelector;
    use hexcluster::coloring::ColorRoles;
    use hexcluster::coloring::scheme60::{assign_scheme60, centroid_distances, zone_sizes};
    use hexcluster::spatial::hex::Hex;

    fn disc() -> Vec<Hex> {
        // Center, inner ring, then the second ring
        let mut hexes = vec![Hex::ORIGIN];
        hexes.extend(Hex::ORIGIN.neighbors());
        for q in -2_i32..=2 {
            for r in -2_i32..=2 {
                let s = -q - r;
                if q.abs().max(r.abs()).max(s.abs()) == 2 {
                    hexes.push(Hex::new(q, r));
                }
            }
        }
        hexes
    }

    // Tests zone sizes round half to even and the remainder goes outermost
    // Verified by rounding half up
    #[test]
    fn test_zone_sizes() {
        assert_eq!(zone_sizes(40), [24, 12, 4]);
        assert_eq!(zone_sizes(10), [6, 3, 1]);
        assert_eq!(zone_sizes(5), [3, 2, 0]);
        assert_eq!(zone_sizes(0), [0, 0, 0]);
    }

    // Tests distances are measured from the centroid
    // Verified by measuring from the origin of the first hex
    #[test]
    fn test_centroid_distances() {
        let distances = centroid_distances(&[Hex::new(0, 0), Hex::new(2, 0)], 1.0);
        assert_eq!(distances.len(), 2);
        assert!((distances[0] - distances[1]).abs() < 1e-12);
        assert!(centroid_distances(&[], 1.0).is_empty());
    }

    // Tests quotas are met exactly and the center takes the dominant color
    // Verified by assigning zones without role preference
    #[test]
    fn test_zones_prefer_roles() {
        let hexes = disc();
        assert_eq!(hexes.len(), 19);
        let roles = ColorRoles {
            dominant: 2,
            secondary: 0,
            accent: 1,
        };
        let Ok(colors) = assign_scheme60(&hexes, &[6, 2, 11], roles, 1.0, &mut RandomSelector::new(4))
        else {
            panic!("quotas cover every hex");
        };

        let mut counts = [0; 3];
        for &color in &colors {
            counts[color] += 1;
        }
        assert_eq!(counts, [6, 2, 11]);
        assert_eq!(colors[0], 2);
        assert!(colors[1..7].iter().all(|&color| color == 2));
    }

    // Tests exhausted preferences fall back to colors with remaining quota
    // Verified by always using the preferred color
    #[test]
    fn test_fallback_when_preferred_exhausted() {
        let hexes = disc();
        let roles = ColorRoles::from_quotas(&[1, 18]);
        assert_eq!(roles.dominant, 1);

        let Ok(colors) = assign_scheme60(&hexes, &[1, 18], roles, 1.0, &mut RandomSelector::new(6))
        else {
            panic!("quotas cover every hex");
        };
        assert_eq!(colors.iter().filter(|&&color| color == 0).count(), 1);
        assert_eq!(colors.iter().filter(|&&color| color == 1).count(), 18);
    }

    // Tests running out of quota is reported instead of silently miscoloring
    // Verified by returning a default color
    #[test]
    fn test_quota_exhaustion_reported() {
        let hexes = disc();
        let roles = ColorRoles {
            dominant: 0,
            secondary: 0,
            accent: 0,
        };
        let result = assign_scheme60(&hexes, &[3], roles, 1.0, &mut RandomSelector::new(1));
        assert!(matches!(
            result,
            Err(hexcluster::LayoutError::QuotaExhausted { .. })
        ));
    }
}
