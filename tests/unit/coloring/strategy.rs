//! Tests for strategy parsing, default roles and dispatch

#[cfg(test)]
mod tests {
    use hexcluster::LayoutError;
    use hexcluster::algorithm::selection::RandomSelector;
    use hexcluster::coloring::{
        ColorMode, ColorRoles, ColorStrategy, GradientAxis, assign_colors,
    };
    use hexcluster::spatial::hex::Hex;

    // Tests identifiers parse case-insensitively
    // Verified by matching exact case only
    #[test]
    fn test_parse_identifiers() {
        assert_eq!("Gradient".parse::<ColorMode>().ok(), Some(ColorMode::Gradient));
        assert_eq!(" scheme60 ".parse::<ColorMode>().ok(), Some(ColorMode::Scheme60));
        assert_eq!("RANDOM".parse::<ColorMode>().ok(), Some(ColorMode::Random));
        assert_eq!("x".parse::<GradientAxis>().ok(), Some(GradientAxis::X));
        assert_eq!(
            "Principal".parse::<GradientAxis>().ok(),
            Some(GradientAxis::Principal)
        );
    }

    // Tests unknown identifiers are rejected rather than defaulted
    // Verified by falling back to random
    #[test]
    fn test_unknown_identifiers_rejected() {
        let mode = "spiral".parse::<ColorMode>();
        assert!(matches!(
            mode,
            Err(LayoutError::UnsupportedStrategy { ref identifier }) if identifier == "spiral"
        ));
        assert!("diagonal".parse::<GradientAxis>().is_err());
    }

    // Tests default roles rank colors by quota with ties to the lower index
    // Verified by sorting ascending
    #[test]
    fn test_roles_from_quotas() {
        let roles = ColorRoles::from_quotas(&[4, 24, 12]);
        assert_eq!(
            roles,
            ColorRoles {
                dominant: 1,
                secondary: 2,
                accent: 0,
            }
        );

        let tied = ColorRoles::from_quotas(&[5, 5]);
        assert_eq!((tied.dominant, tied.secondary, tied.accent), (0, 1, 0));
    }

    // Tests strategy names and modes
    // Verified by naming gradient as random
    #[test]
    fn test_strategy_names() {
        let gradient = ColorStrategy::Gradient {
            axis: GradientAxis::default(),
            order: None,
        };
        assert_eq!(gradient.name(), "gradient");
        assert_eq!(gradient.mode(), ColorMode::Gradient);
        assert_eq!(ColorStrategy::default().name(), "random");
        assert_eq!(ColorStrategy::Scheme60 { roles: None }.name(), "scheme60");
    }

    // Tests dispatch returns one color per hex for every strategy
    // Verified by returning an empty list for gradient
    #[test]
    fn test_assign_colors_dispatch() {
        let hexes: Vec<Hex> = (0..6).map(|q| Hex::new(q, 0)).collect();
        let quotas = [3, 2, 1];
        let strategies = [
            ColorStrategy::Random,
            ColorStrategy::Gradient {
                axis: GradientAxis::X,
                order: None,
            },
            ColorStrategy::Scheme60 { roles: None },
        ];

        for strategy in &strategies {
            let result = assign_colors(&hexes, &quotas, strategy, 1.0, &mut RandomSelector::new(2));
            let Ok(colors) = result else {
                panic!("{} should color every hex", strategy.name());
            };
            let mut counts = [0; 3];
            for &color in &colors {
                counts[color] += 1;
            }
            assert_eq!(counts, quotas, "{}", strategy.name());
        }
    }

    // Tests the gradient identity order bands colors by palette index
    // Verified by reversing the identity order
    #[test]
    fn test_gradient_identity_order() {
        let hexes: Vec<Hex> = (0..6).map(|q| Hex::new(q, -(q / 2))).collect();
        let strategy = ColorStrategy::Gradient {
            axis: GradientAxis::X,
            order: None,
        };
        let colors = assign_colors(&hexes, &[3, 3], &strategy, 1.0, &mut RandomSelector::new(1));
        assert_eq!(colors.ok(), Some(vec![0, 0, 0, 1, 1, 1]));
    }
}
