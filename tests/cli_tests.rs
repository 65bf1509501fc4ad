use std::fs;

use entryform::cli::{Commands, ConfigCommands};
use entryform::config::AppConfig;
use entryform::errors::EntryFormError;
use entryform::interfaces::cli::{CliError, run_cli_command};
use tempfile::TempDir;

fn setup() -> (TempDir, String, AppConfig) {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("data.json").display().to_string();
    (dir, file, AppConfig::default())
}

fn add(config: &AppConfig, file: &str, title: &str, content: &str) -> Result<(), CliError> {
    run_cli_command(
        Commands::Add {
            content: content.to_string(),
            title: title.to_string(),
        },
        config,
        Some(file),
    )
}

#[test]
fn test_add_creates_document() {
    let (_dir, file, config) = setup();
    add(&config, &file, "Hi", "Hello world").unwrap();
    add(&config, &file, "", "  Second entry  ").unwrap();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        r#"[{"Title":"Hi","Content":"Hello world"},{"Title":"","Content":"Second entry"}]"#
    );
}

#[test]
fn test_add_invalid_entry_is_rejected() {
    let (_dir, file, config) = setup();
    let err = add(&config, &file, "Hi", "   ").unwrap_err();
    assert!(matches!(
        err.entry_error(),
        Some(EntryFormError::Validation(_))
    ));
    assert!(!std::path::Path::new(&file).exists());
}

#[test]
fn test_edit_keeps_unspecified_fields() {
    let (_dir, file, config) = setup();
    add(&config, &file, "A", "hello").unwrap();

    run_cli_command(
        Commands::Edit {
            index: 0,
            title: None,
            content: Some("hello again".to_string()),
        },
        &config,
        Some(&file),
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        r#"[{"Title":"A","Content":"hello again"}]"#
    );
}

#[test]
fn test_edit_without_changes_is_parse_error() {
    let (_dir, file, config) = setup();
    let err = run_cli_command(
        Commands::Edit {
            index: 0,
            title: None,
            content: None,
        },
        &config,
        Some(&file),
    )
    .unwrap_err();
    assert!(matches!(err, CliError::ParseError(_)));
}

#[test]
fn test_remove_by_index() {
    let (_dir, file, config) = setup();
    add(&config, &file, "A", "hello").unwrap();
    add(&config, &file, "B", "world").unwrap();

    run_cli_command(Commands::Remove { index: 0 }, &config, Some(&file)).unwrap();
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        r#"[{"Title":"B","Content":"world"}]"#
    );

    let err = run_cli_command(Commands::Remove { index: 5 }, &config, Some(&file)).unwrap_err();
    assert!(matches!(err.entry_error(), Some(EntryFormError::NotFound(_))));
}

#[test]
fn test_over_limit_add_is_saved_but_export_refused() {
    let (dir, file, mut config) = setup();
    config.editor.size_limit_bytes = 40;
    add(&config, &file, "", "x").unwrap();

    add(&config, &file, "Title", "this one is too big").unwrap();
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        r#"[{"Title":"","Content":"x"},{"Title":"Title","Content":"this one is too big"}]"#
    );

    let out = dir.path().join("export.json");
    let err = run_cli_command(
        Commands::Export {
            file_path: Some(out.display().to_string()),
        },
        &config,
        Some(&file),
    )
    .unwrap_err();
    assert!(matches!(err.entry_error(), Some(EntryFormError::SizeLimit(_))));
    assert!(!out.exists());
}

#[test]
fn test_block_add_policy_refuses_over_limit_add() {
    let (_dir, file, mut config) = setup();
    config.editor.size_limit_bytes = 40;
    config.editor.block_add_when_over_limit = true;
    add(&config, &file, "", "x").unwrap();
    let before = fs::read_to_string(&file).unwrap();

    let err = add(&config, &file, "Title", "this one is too big").unwrap_err();
    assert!(matches!(err.entry_error(), Some(EntryFormError::SizeLimit(_))));
    assert_eq!(fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn test_over_limit_document_can_be_trimmed() {
    let (_dir, file, mut config) = setup();
    config.editor.size_limit_bytes = 40;
    fs::write(
        &file,
        r#"[{"Title":"A","Content":"first entry"},{"Title":"B","Content":"second entry"},{"Title":"C","Content":"third entry"}]"#,
    )
    .unwrap();

    run_cli_command(Commands::Remove { index: 0 }, &config, Some(&file)).unwrap();
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        r#"[{"Title":"B","Content":"second entry"},{"Title":"C","Content":"third entry"}]"#
    );

    run_cli_command(
        Commands::Edit {
            index: 1,
            title: None,
            content: Some("3".to_string()),
        },
        &config,
        Some(&file),
    )
    .unwrap();
    assert!(fs::read_to_string(&file).unwrap().ends_with(r#"{"Title":"C","Content":"3"}]"#));
}

#[test]
fn test_import_over_limit_document() {
    let (dir, file, mut config) = setup();
    config.editor.size_limit_bytes = 40;

    let source = dir.path().join("big.json");
    let text = r#"[{"Title":"A","Content":"first entry"},{"Title":"B","Content":"second entry"}]"#;
    fs::write(&source, text).unwrap();

    run_cli_command(
        Commands::Import {
            file_path: source.display().to_string(),
        },
        &config,
        Some(&file),
    )
    .unwrap();
    assert_eq!(fs::read_to_string(&file).unwrap(), text);
}

#[test]
fn test_import_replaces_working_document() {
    let (dir, file, config) = setup();
    add(&config, &file, "old", "old").unwrap();

    let source = dir.path().join("source.json");
    fs::write(
        &source,
        r#"[{"Title":"A","Content":"hello"},{"Title":"B","Content":"world","Extra":true}]"#,
    )
    .unwrap();

    run_cli_command(
        Commands::Import {
            file_path: source.display().to_string(),
        },
        &config,
        Some(&file),
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        r#"[{"Title":"A","Content":"hello"},{"Title":"B","Content":"world"}]"#
    );
}

#[test]
fn test_import_rejects_non_array() {
    let (dir, file, config) = setup();
    add(&config, &file, "keep", "me").unwrap();
    let source = dir.path().join("bad.json");
    fs::write(&source, r#"{"not":"an array"}"#).unwrap();

    let err = run_cli_command(
        Commands::Import {
            file_path: source.display().to_string(),
        },
        &config,
        Some(&file),
    )
    .unwrap_err();
    assert!(matches!(err.entry_error(), Some(EntryFormError::Import(_))));
    assert!(fs::read_to_string(&file).unwrap().contains("keep"));
}

#[test]
fn test_import_missing_source() {
    let (dir, file, config) = setup();
    let err = run_cli_command(
        Commands::Import {
            file_path: dir.path().join("nope.json").display().to_string(),
        },
        &config,
        Some(&file),
    )
    .unwrap_err();
    assert!(matches!(err, CliError::StorageError(_)));
}

#[test]
fn test_export_to_path() {
    let (dir, file, config) = setup();
    add(&config, &file, "Hi", "Hello world").unwrap();

    let out = dir.path().join("export.json");
    run_cli_command(
        Commands::Export {
            file_path: Some(out.display().to_string()),
        },
        &config,
        Some(&file),
    )
    .unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), fs::read_to_string(&file).unwrap());
}

#[test]
fn test_list_stats_validate_do_not_write() {
    let (_dir, file, config) = setup();
    run_cli_command(Commands::List, &config, Some(&file)).unwrap();
    run_cli_command(Commands::Stats { json: true }, &config, Some(&file)).unwrap();
    run_cli_command(
        Commands::Validate {
            content: "Hello".to_string(),
            title: "Hi".to_string(),
        },
        &config,
        Some(&file),
    )
    .unwrap();
    assert!(!std::path::Path::new(&file).exists());

    let err = run_cli_command(
        Commands::Validate {
            content: "Hello".to_string(),
            title: "t".repeat(26),
        },
        &config,
        Some(&file),
    )
    .unwrap_err();
    assert!(matches!(err.entry_error(), Some(EntryFormError::Validation(_))));
}

#[test]
fn test_config_generate_force() {
    let (dir, _file, config) = setup();
    let path = dir.path().join("entryform.toml");
    fs::write(&path, "old").unwrap();

    run_cli_command(
        Commands::Config {
            action: ConfigCommands::Generate {
                output_path: Some(path.display().to_string()),
                force: true,
            },
        },
        &config,
        None,
    )
    .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[editor]"));
    assert!(text.contains("size_limit_bytes = 5120"));
}
