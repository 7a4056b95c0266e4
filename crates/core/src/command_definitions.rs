use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A saved shell command as stored in the catalog YAML.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub command: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

impl CommandDefinition {
    /// The command tokens joined the way a shell line would show them.
    #[must_use]
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

impl Display for CommandDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.id, &self.description) {
            (Some(id), Some(desc)) => write!(formatter, "{} ({})", id, desc),
            (Some(id), None) => formatter.write_str(id),
            (None, Some(desc)) => formatter.write_str(desc),
            // Neither exists, fall back to the command itself
            (None, None) => formatter.write_str(&self.command_line()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(id: Option<&str>, description: Option<&str>) -> CommandDefinition {
        CommandDefinition {
            command: vec!["git".to_string(), "status".to_string()],
            id: id.map(ToString::to_string),
            description: description.map(ToString::to_string),
            working_directory: None,
        }
    }

    #[test]
    fn test_display_variants() {
        assert_eq!(
            definition(Some("st"), Some("Repo status")).to_string(),
            "st (Repo status)"
        );
        assert_eq!(definition(Some("st"), None).to_string(), "st");
        assert_eq!(definition(None, Some("Repo status")).to_string(), "Repo status");
        assert_eq!(definition(None, None).to_string(), "git status");
    }

    #[test]
    fn test_optional_fields_are_not_serialized() {
        let yaml = serde_yaml::to_string(&definition(Some("st"), None)).unwrap();
        assert!(yaml.contains("id: st"));
        assert!(!yaml.contains("description"));
        assert!(!yaml.contains("working_directory"));
    }
}
