//! See [`StyleTable`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::GeopaintError;
use crate::Color;

/// Paint rules for area and point features, selected by the `admin_level` attribute of the feature, and a single
/// rule for roads.
///
/// The table is read from a YAML document of this shape (every field may be omitted):
///
/// ```yaml
/// admin_level:
///   - rank: 2
///     borderColor: "#202020FF"
///     fillColor: "#FF0000FF"
///     lineWidth: 2.0
/// lines:
///   road: "#FFCC00FF"
///   roadWidth: 1.5
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StyleTable {
    admin_levels: Vec<AdminLevelRule>,
    by_rank: BTreeMap<u32, usize>,
    lines: LineRule,
}

/// Paint rule for features of one administrative level.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminLevelRule {
    /// Administrative level this rule is for.
    pub rank: u32,
    /// Outline color. `None` means the default border color is used.
    #[serde(deserialize_with = "optional_color")]
    pub border_color: Option<Color>,
    /// Fill color. `None` means the default fill color is used.
    #[serde(deserialize_with = "optional_color")]
    pub fill_color: Option<Color>,
    /// Width of the outline. `0` means the default line width is used.
    pub line_width: f64,
}

/// Paint rule for line features marked as roads.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineRule {
    /// Color of roads. `None` means the default border color is used.
    #[serde(deserialize_with = "optional_color")]
    pub road: Option<Color>,
    /// Width of roads. `0` means the default line width is used.
    #[serde(rename = "roadWidth")]
    pub road_width: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleDocument {
    admin_level: Vec<AdminLevelRule>,
    lines: LineRule,
}

impl StyleTable {
    /// Creates a new table from a list of rules and the road rule.
    ///
    /// If several rules have the same rank, the first of them is used.
    pub fn new(admin_levels: Vec<AdminLevelRule>, lines: LineRule) -> Self {
        let mut by_rank = BTreeMap::new();
        for (index, rule) in admin_levels.iter().enumerate() {
            if by_rank.contains_key(&rule.rank) {
                log::warn!(
                    "Duplicate style rule for admin level {}, only the first one is used",
                    rule.rank
                );
            } else {
                by_rank.insert(rule.rank, index);
            }
        }

        Self {
            admin_levels,
            by_rank,
            lines,
        }
    }

    /// Parses the table from a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self, GeopaintError> {
        // An empty document is a valid "no rules" configuration.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let document: StyleDocument = serde_yaml_ng::from_str(text)?;
        Ok(Self::new(document.admin_level, document.lines))
    }

    /// Loads the table from a YAML file.
    ///
    /// A missing file is not an error: a warning is logged and an empty table is returned, so that every feature is
    /// drawn with the default paint.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeopaintError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let table = Self::from_yaml(&text)?;
                log::debug!(
                    "Loaded {} admin level style rules from {}",
                    table.admin_levels.len(),
                    path.display()
                );
                Ok(table)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::warn!(
                    "Style file {} not found, default styles will be used",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Returns the rule for the given admin level, or `None` if the table has no such rule.
    pub fn rule(&self, rank: i64) -> Option<&AdminLevelRule> {
        let rank = u32::try_from(rank).ok()?;
        self.by_rank
            .get(&rank)
            .and_then(|index| self.admin_levels.get(*index))
    }

    /// Admin level rules in the order they were defined.
    pub fn admin_levels(&self) -> &[AdminLevelRule] {
        &self.admin_levels
    }

    /// Rule for roads.
    pub fn lines(&self) -> &LineRule {
        &self.lines
    }
}

/// Empty strings mean "not set". Invalid colors are reported and also treated as not set.
fn optional_color<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|hex| {
        let hex = hex.trim();
        if hex.is_empty() {
            return None;
        }

        let color = Color::try_from_hex(hex);
        if color.is_none() {
            log::warn!("Invalid color '{hex}' in style configuration, default color will be used");
        }
        color
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const STYLE: &str = r##"
admin_level:
  - rank: 0
  - rank: 1
    fillColor: ""
    borderColor: "#00FF00"
  - rank: 2
    borderColor: ""
    fillColor: "#FF0000FF"
    lineWidth: 2.0
lines:
  road: "#FFCC00FF"
  roadWidth: 1.5
"##;

    #[test]
    fn parses_style_document() {
        let table = StyleTable::from_yaml(STYLE).unwrap();
        assert_eq!(table.admin_levels().len(), 3);

        let rule = table.rule(2).unwrap();
        assert_eq!(rule.fill_color, Some(Color::RED));
        assert_eq!(rule.border_color, None);
        assert_eq!(rule.line_width, 2.0);

        let rule = table.rule(1).unwrap();
        assert_eq!(rule.fill_color, None);
        assert_eq!(rule.border_color, Some(Color::rgba(0, 255, 0, 255)));
        assert_eq!(rule.line_width, 0.0);

        assert_eq!(table.lines().road, Color::try_from_hex("#FFCC00FF"));
        assert_eq!(table.lines().road_width, 1.5);
    }

    #[test]
    fn lookup_is_by_rank_not_position() {
        let table = StyleTable::new(
            vec![
                AdminLevelRule {
                    rank: 4,
                    line_width: 4.0,
                    ..Default::default()
                },
                AdminLevelRule {
                    rank: 2,
                    line_width: 2.0,
                    ..Default::default()
                },
            ],
            LineRule::default(),
        );
        assert_eq!(table.rule(2).unwrap().line_width, 2.0);
        assert_eq!(table.rule(4).unwrap().line_width, 4.0);
        assert!(table.rule(0).is_none());
        assert!(table.rule(1).is_none());
    }

    #[test]
    fn unknown_ranks_are_not_found() {
        let table = StyleTable::from_yaml(STYLE).unwrap();
        assert!(table.rule(3).is_none());
        assert!(table.rule(-1).is_none());
        assert!(table.rule(i64::MAX).is_none());
    }

    #[test]
    fn duplicate_rank_uses_first_rule() {
        let table = StyleTable::from_yaml(
            "admin_level:\n  - rank: 1\n    lineWidth: 1\n  - rank: 1\n    lineWidth: 5\n",
        )
        .unwrap();
        assert_eq!(table.rule(1).unwrap().line_width, 1.0);
    }

    #[test]
    fn empty_and_partial_documents() {
        assert_eq!(StyleTable::from_yaml("").unwrap(), StyleTable::default());

        let table = StyleTable::from_yaml("lines:\n  roadWidth: 3\n").unwrap();
        assert!(table.admin_levels().is_empty());
        assert_eq!(table.lines().road, None);
        assert_eq!(table.lines().road_width, 3.0);
    }

    #[test]
    fn invalid_color_is_not_set() {
        let table =
            StyleTable::from_yaml("admin_level:\n  - rank: 0\n    fillColor: \"red\"\n").unwrap();
        assert_eq!(table.rule(0).unwrap().fill_color, None);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(matches!(
            StyleTable::from_yaml("admin_level: [rank: {"),
            Err(GeopaintError::Style(_))
        ));
    }

    #[test]
    fn missing_file_gives_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let table = StyleTable::load(dir.path().join("style.yml")).unwrap();
        assert_eq!(table, StyleTable::default());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(STYLE.as_bytes()).unwrap();
        let table = StyleTable::load(file.path()).unwrap();
        assert_eq!(table.rule(2).unwrap().fill_color, Some(Color::RED));
    }
}
