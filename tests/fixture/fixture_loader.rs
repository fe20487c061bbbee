#![allow(clippy::expect_used)]

/// Fixture loader
///
/// A fixture file is a JSON array of comment strings and test cases. Every
/// record field is always checked: an omitted or `null` optional field means
/// the parsed location must not have it.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    /// `parse_location_uri`
    #[default]
    Location,
    /// `parse_standard_uri`
    Standard,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LocationCase {
    pub input: Option<String>,
    #[serde(default)]
    pub parser: ParserKind,
    /// The parser must return no location at all
    #[serde(default)]
    pub absent: bool,
    pub protocol: Option<String>,
    pub host: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    #[serde(default)]
    pub pathname: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub context_root: String,
    pub room: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    Location(LocationCase),
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub input: Option<String>,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

/// Load the bundled fixture file
pub fn load_fixtures() -> Vec<TestCase> {
    let data = include_str!("./locations.json");
    serde_json::from_str(data).expect("Failed to parse location fixtures")
}
