//! Integration tests for shelf-core
//!
//! These tests verify that the core functionality works together correctly
//! by testing complete catalog workflows end-to-end.

use shelf_core::{
    command_definitions::CommandDefinition,
    config::{expand_working_directory, get_config_path},
    error::Error,
    file_handling::{
        append_command_definition, get_command_definitions, get_command_definitions_or_empty,
        write_command_definitions,
    },
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Test loading and parsing a complete catalog
#[test]
fn test_complete_catalog_workflow() {
    let yaml_content = r#"
- id: "greet"
  command: ["echo", "Hello World!"]
  description: "Greet the world"
  working_directory: "~/projects"

- id: "deploy"
  command: ["kubectl", "apply", "-f", "manifest.yml"]
  description: "Deploy Kubernetes manifest"

- command: ["ls", "-la"]
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let commands = get_command_definitions(&temp_path).unwrap();

    assert_eq!(commands.len(), 3);

    let greet_cmd = &commands[0];
    assert_eq!(greet_cmd.id, Some("greet".to_string()));
    assert_eq!(greet_cmd.command_line(), "echo Hello World!");
    assert_eq!(greet_cmd.to_string(), "greet (Greet the world)");

    let working_dir = expand_working_directory(greet_cmd.working_directory.as_deref()).unwrap();
    assert!(working_dir.ends_with("projects"));
    assert!(!working_dir.starts_with('~'));

    let deploy_cmd = &commands[1];
    assert!(deploy_cmd.working_directory.is_none());

    let anonymous = &commands[2];
    assert!(anonymous.id.is_none());
    assert_eq!(anonymous.to_string(), "ls -la");
}

/// A catalog grown one command at a time reads back exactly as written
#[test]
fn test_catalog_grows_by_appending() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = get_config_path(temp_dir.path().join("commands.yml").to_str().unwrap());

    assert!(get_command_definitions_or_empty(&config_path)
        .unwrap()
        .is_empty());

    let status = CommandDefinition {
        command: vec!["git".to_string(), "status".to_string()],
        id: Some("st".to_string()),
        description: Some("Repo status".to_string()),
        working_directory: None,
    };
    let pods = CommandDefinition {
        command: vec!["kubectl".to_string(), "get".to_string(), "pods".to_string()],
        id: None,
        description: None,
        working_directory: Some("~/infra".to_string()),
    };

    append_command_definition(&config_path, status.clone()).unwrap();
    let written = append_command_definition(&config_path, pods.clone()).unwrap();

    assert_eq!(written, vec![status.clone(), pods]);
    assert_eq!(get_command_definitions(&config_path).unwrap(), written);

    let duplicate = append_command_definition(&config_path, status);
    assert!(matches!(duplicate, Err(Error::NonUniqueCommandId(_))));
    assert_eq!(get_command_definitions(&config_path).unwrap().len(), 2);
}

/// Optional fields are left out of the written YAML
#[test]
fn test_written_catalog_omits_unset_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("commands.yml");
    let path = path.to_str().unwrap();

    let commands = vec![CommandDefinition {
        command: vec!["make".to_string()],
        id: None,
        description: None,
        working_directory: None,
    }];
    write_command_definitions(path, &commands).unwrap();

    let contents = std::fs::read_to_string(path).unwrap();
    assert!(contents.contains("make"));
    assert!(!contents.contains("id"));
    assert!(!contents.contains("working_directory"));
}

/// Test that invalid catalogs are rejected
#[test]
fn test_invalid_catalogs() {
    let cases = [
        (
            r#"
- id: "same"
  command: ["echo", "one"]
- id: "same"
  command: ["echo", "two"]
"#,
            "duplicate",
        ),
        (
            r#"
- id: "42"
  command: ["echo", "number"]
"#,
            "numeric",
        ),
        (
            r#"
- id: "has space"
  command: ["echo", "space"]
"#,
            "space",
        ),
        ("- description: no command", "missing command"),
    ];

    for (yaml_content, case) in cases {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{yaml_content}").unwrap();

        let result = get_command_definitions(temp_file.path().to_str().unwrap());
        assert!(result.is_err(), "{case} catalog should be rejected");
    }
}

/// Errors name the file they came from
#[test]
fn test_error_messages_name_the_catalog() {
    let error = get_command_definitions("/this/path/does/not/exist.yml").unwrap_err();
    assert!(error.to_string().contains("/this/path/does/not/exist.yml"));

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "[]").unwrap();
    let path = temp_file.path().to_str().unwrap();

    let error = get_command_definitions(path).unwrap_err();
    assert!(matches!(error, Error::EmptyCommandDefinition { .. }));
    assert!(error.to_string().contains(path));
}
