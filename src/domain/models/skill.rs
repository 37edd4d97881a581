use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A skill known to the platform directory, with a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u64,
    pub name: String,
}

/// A skill the user has picked for the current search.
///
/// Canonical entries reference a directory skill by id; custom entries are
/// free text the directory does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectedSkill {
    Canonical { id: u64, name: String },
    Custom { name: String },
}

impl SelectedSkill {
    pub fn name(&self) -> &str {
        match self {
            SelectedSkill::Canonical { name, .. } => name,
            SelectedSkill::Custom { name } => name,
        }
    }

    pub fn id(&self) -> Option<u64> {
        match self {
            SelectedSkill::Canonical { id, .. } => Some(*id),
            SelectedSkill::Custom { .. } => None,
        }
    }
}

impl From<Skill> for SelectedSkill {
    fn from(skill: Skill) -> Self {
        SelectedSkill::Canonical {
            id: skill.id,
            name: skill.name,
        }
    }
}

/// Lowercased, whitespace-collapsed form used for duplicate detection.
pub fn normalize_skill(value: &str) -> String {
    WHITESPACE
        .replace_all(value.to_lowercase().trim(), " ")
        .into_owned()
}

/// Display form: original case, collapsed whitespace.
pub fn format_skill(value: &str) -> String {
    WHITESPACE.replace_all(value.trim(), " ").into_owned()
}

/// Drops entries whose normalized name repeats an earlier entry, keeping
/// first occurrences in order. Entries that normalize to nothing are dropped.
pub fn dedupe_skills(items: Vec<SelectedSkill>) -> Vec<SelectedSkill> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let key = normalize_skill(item.name());
            !key.is_empty() && seen.insert(key)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(id: u64, name: &str) -> SelectedSkill {
        SelectedSkill::Canonical {
            id,
            name: name.to_string(),
        }
    }

    fn custom(name: &str) -> SelectedSkill {
        SelectedSkill::Custom {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_normalize_collapses_case_and_whitespace() {
        assert_eq!(normalize_skill("  Machine   Learning "), "machine learning");
    }

    #[test]
    fn test_format_skill_keeps_case() {
        assert_eq!(format_skill("  React   Native "), "React Native");
    }

    #[test]
    fn test_dedupe_is_case_insensitive() {
        let deduped = dedupe_skills(vec![
            canonical(1, "React"),
            custom("react"),
            custom("  REACT  "),
        ]);
        assert_eq!(deduped, vec![canonical(1, "React")]);
    }

    #[test]
    fn test_dedupe_drops_blank_names() {
        let deduped = dedupe_skills(vec![custom("   "), custom("Rust")]);
        assert_eq!(deduped, vec![custom("Rust")]);
    }

    #[test]
    fn test_dedupe_preserves_insertion_order() {
        let deduped = dedupe_skills(vec![custom("Go"), canonical(3, "Python"), custom("go")]);
        assert_eq!(deduped, vec![custom("Go"), canonical(3, "Python")]);
    }
}
