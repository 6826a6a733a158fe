//! Tests for command-line parsing and the end-to-end runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use tilecollapse::AlgorithmError;
    use tilecollapse::io::cli::{Cli, Runner};
    use tilecollapse::io::configuration::{
        DEFAULT_DIMENSION, DEFAULT_MAX_RESTARTS, DEFAULT_SEED, FAST_MODE_STEPS, MAX_TILE_PIXELS,
    };
    use tilecollapse::io::presets::Preset;
    use tilecollapse::spatial::tiles::EdgeSocket;

    // Tests defaults pick the single-line kolam set on a bounded square grid
    // Breaks if default values are changed
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.preset, Preset::Kolam1);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.dimensions(), (DEFAULT_DIMENSION, DEFAULT_DIMENSION));
        assert_eq!(cli.steps_per_update(), 1);
        assert!(cli.should_show_progress());
        assert_eq!(cli.output_path(), PathBuf::from("kolam1_result.png"));

        let config = cli.solver_config();
        assert_eq!(config.boundary, Some(EdgeSocket::from("000")));
        assert_eq!(config.max_restarts, Some(DEFAULT_MAX_RESTARTS));
    }

    // Tests every flag reaches the solver configuration
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--preset",
            "circuit",
            "--seed",
            "123",
            "-w",
            "6",
            "-H",
            "4",
            "-x",
            "--no-restart-limit",
            "--fast",
            "--quiet",
            "--output",
            "out/grid.png",
        ]);

        assert_eq!(cli.preset, Preset::Circuit);
        assert_eq!(cli.dimensions(), (6, 4));
        assert_eq!(cli.steps_per_update(), FAST_MODE_STEPS);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.output_path(), PathBuf::from("out/grid.png"));

        let config = cli.solver_config();
        assert_eq!(config.seed, 123);
        assert!(config.mirror_x);
        assert!(!config.mirror_y);
        assert_eq!(config.max_restarts, None);
        assert_eq!(config.boundary, None);
    }

    // Tests --no-boundary drops the preset's border socket
    #[test]
    fn test_no_boundary_flag() {
        let cli = Cli::parse_from(["program", "-p", "kolam0", "--no-boundary"]);
        assert_eq!(cli.solver_config().boundary, None);

        let cli = Cli::parse_from(["program", "-p", "kolam0"]);
        assert_eq!(cli.solver_config().boundary, Some(EdgeSocket::from("00")));
    }

    // Tests a quiet run solves a small grid and writes the PNG
    #[test]
    fn test_runner_writes_output() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let output = temp_dir.path().join("kolam.png");
        let output_arg = output.to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "program",
            "-w",
            "3",
            "--tile-size",
            "8",
            "--quiet",
            "--output",
            output_arg.as_str(),
        ]);
        let summary = Runner::new(cli).run().expect("small kolam grid solves");

        assert!(summary.completed);
        assert_eq!(summary.output, output);
        assert!(output.exists());

        let written = image::open(&output).expect("valid png").to_rgba8();
        assert_eq!(written.dimensions(), (24, 24));
    }

    // Tests zero-pixel tiles are rejected before solving
    #[test]
    fn test_runner_rejects_zero_tile_size() {
        let cli = Cli::parse_from(["program", "--tile-size", "0", "--quiet"]);
        let result = Runner::new(cli).run();
        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidParameter {
                parameter: "tile_size",
                ..
            })
        ));
    }

    // Tests tiles above the pixel ceiling are rejected before solving
    // Breaks if the rendered canvas is allowed to overflow
    #[test]
    fn test_runner_rejects_oversized_tile_size() {
        let too_large = (MAX_TILE_PIXELS + 1).to_string();
        let cli = Cli::parse_from(["program", "--tile-size", too_large.as_str(), "--quiet"]);
        let result = Runner::new(cli).run();
        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidParameter {
                parameter: "tile_size",
                ..
            })
        ));
    }
}
