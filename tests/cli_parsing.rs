use authconf::cli::{Cli, Commands, RenderFormatArg};
use authconf::OAuthProvider;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_check_with_global_flags() {
    let cli = Cli::try_parse_from(["authconf", "check", "--json", "--config", "creds.yaml"]).unwrap();

    assert!(matches!(cli.command, Commands::Check));
    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("creds.yaml")));
}

#[test]
fn test_parse_init_defaults() {
    let cli = Cli::try_parse_from(["authconf", "init"]).unwrap();

    match cli.command {
        Commands::Init(args) => {
            assert!(!args.force);
            assert_eq!(args.path, PathBuf::from("."));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_init_force_with_path() {
    let cli = Cli::try_parse_from(["authconf", "init", "--force", "web"]).unwrap();

    match cli.command {
        Commands::Init(args) => {
            assert!(args.force);
            assert_eq!(args.path, PathBuf::from("web"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_render_defaults_to_js() {
    let cli = Cli::try_parse_from(["authconf", "render"]).unwrap();

    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.format, RenderFormatArg::Js);
            assert!(!args.template);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_render_json_template() {
    let cli = Cli::try_parse_from(["authconf", "render", "--format", "json", "--template"]).unwrap();

    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.format, RenderFormatArg::Json);
            assert!(args.template);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_authorize_url() {
    let cli = Cli::try_parse_from(["authconf", "authorize-url", "--state", "abc"]).unwrap();

    match cli.command {
        Commands::AuthorizeUrl(args) => {
            assert_eq!(args.provider, OAuthProvider::Google);
            assert_eq!(args.state.as_deref(), Some("abc"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_unknown_provider_fails() {
    let result = Cli::try_parse_from(["authconf", "authorize-url", "--provider", "myspace"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_unknown_format_fails() {
    let result = Cli::try_parse_from(["authconf", "render", "--format", "toml"]);
    assert!(result.is_err());
}
