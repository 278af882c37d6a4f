//! Tests for command-line parsing, configuration assembly and batch runs

#[cfg(test)]
mod tests {
    use clap::Parser;
    use hexcluster::LayoutError;
    use hexcluster::coloring::{ColorRoles, ColorStrategy, GradientAxis};
    use hexcluster::io::cli::{
        BatchRunner, Cli, even_quotas, output_path, parse_aspect, parse_length_range,
    };
    use hexcluster::io::configuration::{
        DEFAULT_COLORS, DEFAULT_LAYOUTS, DEFAULT_SEED, DEFAULT_TOTAL_TILES, VERBOSE_LOG_FILTER,
    };
    use std::path::{Path, PathBuf};

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.tiles, DEFAULT_TOTAL_TILES);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.layouts, DEFAULT_LAYOUTS);
        assert_eq!(cli.aspect, (4.0, 3.0));
        assert_eq!(cli.tendril_len, (2, 4));
        assert_eq!(cli.output, PathBuf::from("layouts"));
        assert!(!cli.png && !cli.csv && !cli.quiet);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with list and custom-parsed arguments
    // Verified by modifying custom parsers to ensure they're invoked
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "-n",
            "40",
            "--aspect",
            "16x9",
            "--tendril-len",
            "3:5",
            "--colors",
            "red,blue",
            "--counts",
            "25,15",
            "--color-mode",
            "gradient",
            "--gradient-order",
            "1,0",
            "--seed",
            "7",
            "--quiet",
            "--verbose",
        ]);

        assert_eq!(cli.tiles, 40);
        assert_eq!(cli.aspect, (16.0, 9.0));
        assert_eq!(cli.tendril_len, (3, 5));
        assert_eq!(cli.colors, Some(vec!["red".to_owned(), "blue".to_owned()]));
        assert_eq!(cli.counts, Some(vec![25, 15]));
        assert_eq!(cli.gradient_order, Some(vec![1, 0]));
        assert_eq!(cli.seed, 7);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_filter(), VERBOSE_LOG_FILTER);
    }

    // Tests malformed arguments are rejected by clap
    // Verified by making parse_aspect accept missing separators
    #[test]
    fn test_cli_rejects_malformed() {
        assert!(Cli::try_parse_from(["program", "--aspect", "16"]).is_err());
        assert!(Cli::try_parse_from(["program", "--tendril-len", "a,b"]).is_err());
        assert!(Cli::try_parse_from(["program", "-n", "-3"]).is_err());
    }

    // Tests aspect parsing accepts both separators
    // Verified by splitting only on ':'
    #[test]
    fn test_parse_aspect() {
        assert_eq!(parse_aspect("16:9"), Ok((16.0, 9.0)));
        assert_eq!(parse_aspect("4x3"), Ok((4.0, 3.0)));
        assert_eq!(parse_aspect("1.5 X 1"), Ok((1.5, 1.0)));
        assert!(parse_aspect("0:1").is_err());
        assert!(parse_aspect("wide").is_err());
    }

    // Tests tendril length parsing
    // Verified by treating a single value as MIN,0
    #[test]
    fn test_parse_length_range() {
        assert_eq!(parse_length_range("2,4"), Ok((2, 4)));
        assert_eq!(parse_length_range("2:4"), Ok((2, 4)));
        assert_eq!(parse_length_range("3"), Ok((3, 3)));
        assert!(parse_length_range("-1,2").is_err());
    }

    // Tests even quota split sends the remainder to the first colors
    // Verified by sending the remainder to the last color
    #[test]
    fn test_even_quotas() {
        assert_eq!(even_quotas(10, 3), vec![4, 3, 3]);
        assert_eq!(even_quotas(36, 3), vec![12, 12, 12]);
        assert!(even_quotas(5, 0).is_empty());
    }

    // Tests defaults build a valid configuration with the default palette
    // Verified by making the default palette empty
    #[test]
    fn test_build_config_defaults() {
        let cli = Cli::parse_from(["program"]);
        let config = match cli.build_config() {
            Ok(config) => config,
            Err(error) => panic!("defaults should be valid: {error}"),
        };

        assert_eq!(config.total_tiles(), DEFAULT_TOTAL_TILES);
        assert_eq!(config.palette().len(), DEFAULT_COLORS.len());
        assert_eq!(config.palette().quotas().iter().sum::<usize>(), DEFAULT_TOTAL_TILES);
        assert_eq!(config.strategy(), &ColorStrategy::Random);
    }

    // Tests unknown strategy and axis names are configuration errors
    // Verified by defaulting unknown modes to random
    #[test]
    fn test_build_config_rejects_unknown_strategy() {
        let cli = Cli::parse_from(["program", "--color-mode", "spiral"]);
        let error = cli.build_config().err();
        assert!(matches!(error, Some(LayoutError::UnsupportedStrategy { .. })));

        let cli = Cli::parse_from(["program", "-m", "gradient", "--gradient-axis", "z"]);
        assert!(cli.build_config().is_err());
    }

    // Tests out-of-range values surface as configuration errors
    // Verified by skipping adherence validation
    #[test]
    fn test_build_config_rejects_bad_values() {
        let cli = Cli::parse_from(["program", "--adherence", "1.5"]);
        assert!(cli.build_config().is_err_and(|error| error.is_configuration()));

        let cli = Cli::parse_from(["program", "-n", "10", "--counts", "5,4,2"]);
        assert!(cli.build_config().is_err());
    }

    // Tests explicit role flags override the quota ranking one at a time
    // Verified by ignoring the secondary flag
    #[test]
    fn test_scheme60_role_flags() {
        let cli = Cli::parse_from(["program", "-m", "scheme60", "--secondary", "0"]);
        let strategy = cli.color_strategy(&[4, 24, 12]).ok();
        assert_eq!(
            strategy,
            Some(ColorStrategy::Scheme60 {
                roles: Some(ColorRoles {
                    dominant: 1,
                    secondary: 0,
                    accent: 0,
                }),
            })
        );

        let cli = Cli::parse_from(["program", "-m", "scheme60"]);
        assert_eq!(
            cli.color_strategy(&[4, 24, 12]).ok(),
            Some(ColorStrategy::Scheme60 { roles: None })
        );
    }

    // Tests gradient flags carry through to the strategy
    // Verified by dropping the axis flag
    #[test]
    fn test_gradient_flags() {
        let cli = Cli::parse_from(["program", "-m", "Gradient", "--gradient-axis", "y"]);
        assert_eq!(
            cli.color_strategy(&[12, 12, 12]).ok(),
            Some(ColorStrategy::Gradient {
                axis: GradientAxis::Y,
                order: None,
            })
        );
    }

    // Tests output naming uses the prefix, seed and extension
    // Verified by omitting the seed
    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("out"), 17, "png"),
            PathBuf::from("out/layout_17.png")
        );
    }

    // Tests a quiet batch generates consecutive seeds and writes both exports
    // Verified by skipping the CSV export
    #[test]
    fn test_batch_runner_exports() {
        let temp_dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir failed: {e}"));
        let output = temp_dir.path().join("batch");
        let output_arg = output.to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "program",
            "-n",
            "12",
            "--layouts",
            "2",
            "--seed",
            "5",
            "--png",
            "--csv",
            "--quiet",
            "--output",
            output_arg.as_str(),
        ]);
        let results = match BatchRunner::new(cli).run() {
            Ok(results) => results,
            Err(error) => panic!("batch should succeed: {error}"),
        };

        let seeds: Vec<u64> = results.iter().map(|result| result.seed()).collect();
        assert_eq!(seeds, vec![5, 6]);
        for seed in seeds {
            assert!(output_path(&output, seed, "png").is_file());
            assert!(output_path(&output, seed, "csv").is_file());
        }
    }

    // Tests an invalid configuration stops the batch before any output
    // Verified by creating the output directory eagerly
    #[test]
    fn test_batch_runner_invalid_config() {
        let temp_dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir failed: {e}"));
        let output = temp_dir.path().join("never");
        let output_arg = output.to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "program",
            "--radius",
            "0",
            "--png",
            "--quiet",
            "--output",
            output_arg.as_str(),
        ]);
        assert!(BatchRunner::new(cli).run().is_err());
        assert!(!output.exists());
    }
}
