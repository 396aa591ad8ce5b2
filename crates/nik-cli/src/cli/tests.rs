#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::CommandFactory;
use clap::Parser as _;

use super::*;

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());
    for name in ["parse", "region"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    let expected_flags = [
        "--format",
        "--catalog",
        "--max-file-size",
        "--quiet",
        "--verbose",
        "--help",
        "--version",
    ];
    for flag in &expected_flags {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

/// `nikparse parse --help` must mention its flags and the NIK argument.
#[test]
fn test_parse_help_lists_flags() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("parse")
        .expect("parse subcommand exists");
    let help = format!("{}", sub.render_help());
    assert!(help.contains("NIK"), "help: {help}");
    assert!(help.contains("--skip-geo"), "help: {help}");
    assert!(help.contains("--reference-year"), "help: {help}");
}

/// `nikparse parse --help` must point at `--catalog` for full coverage.
#[test]
fn test_parse_long_help_mentions_catalog_coverage() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("parse")
        .expect("parse subcommand exists");
    let help = format!("{}", sub.render_long_help());
    assert!(help.contains("bundled catalog"), "help: {help}");
    assert!(help.contains("--catalog"), "help: {help}");
}

#[test]
fn test_clap_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_defaults() {
    let cli = Cli::try_parse_from(["nikparse", "parse", "3201010201980001"]).expect("parse");
    assert!(matches!(cli.format, OutputFormat::Human));
    assert!(cli.catalog.is_none() || std::env::var_os("NIKPARSE_CATALOG").is_some());
    match cli.command {
        Command::Parse {
            nik,
            skip_geo,
            reference_year,
        } => {
            assert_eq!(nik, "3201010201980001");
            assert!(!skip_geo);
            assert_eq!(reference_year, None);
        }
        _ => panic!("expected parse subcommand"),
    }
}

#[test]
fn test_parse_flags() {
    let cli = Cli::try_parse_from([
        "nikparse",
        "parse",
        "3201010201980001",
        "--skip-geo",
        "--reference-year",
        "2024",
        "--format",
        "json",
    ])
    .expect("parse");
    assert!(matches!(cli.format, OutputFormat::Json));
    match cli.command {
        Command::Parse {
            skip_geo,
            reference_year,
            ..
        } => {
            assert!(skip_geo);
            assert_eq!(reference_year, Some(2024));
        }
        _ => panic!("expected parse subcommand"),
    }
}

#[test]
fn test_reference_year_zero_is_rejected() {
    let result = Cli::try_parse_from(["nikparse", "parse", "x", "--reference-year", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    let result = Cli::try_parse_from(["nikparse", "-q", "-v", "region", "32"]);
    assert!(result.is_err());
}

#[test]
fn test_catalog_dash_is_stdin() {
    let cli = Cli::try_parse_from(["nikparse", "--catalog", "-", "region", "32"]).expect("parse");
    assert!(matches!(cli.catalog, Some(PathOrStdin::Stdin)));
}

#[test]
fn test_catalog_path() {
    let cli = Cli::try_parse_from(["nikparse", "region", "32", "--catalog", "geo.json"])
        .expect("parse");
    match cli.catalog {
        Some(PathOrStdin::Path(p)) => assert_eq!(p, PathBuf::from("geo.json")),
        other => panic!("expected a path, got {other:?}"),
    }
}

#[test]
fn test_path_or_stdin_label() {
    assert_eq!(PathOrStdin::Stdin.label(), "-");
    assert_eq!(
        PathOrStdin::Path(PathBuf::from("a/b.json")).label(),
        "a/b.json"
    );
}
