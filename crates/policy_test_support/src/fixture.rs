use std::fs;
use std::path::{Path, PathBuf};

use input_core::{EditResult, NumericValue, NumpadKey};
use input_policy::{InputPolicy, Policy, PolicyConfig};
use serde::Deserialize;

use crate::marked::{format_marked, parse_marked};

pub const POLICY_FIXTURE_FORMAT_V1: &str = "numpad-policy-fixture-v1";

/// One TOML fixture file: a list of keystroke transcripts.
#[derive(Clone, Debug, Deserialize)]
pub struct PolicyFixture {
    pub format: String,
    #[serde(rename = "case", default)]
    pub cases: Vec<FixtureCase>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FixtureCase {
    pub id: String,
    pub policy: PolicyConfig,
    /// Starting value in marker notation.
    #[serde(default)]
    pub start: String,
    #[serde(rename = "step", default)]
    pub steps: Vec<FixtureStep>,
}

/// One action and its expected outcome.
///
/// Exactly one of `key`, `paste` or `finalize` is set. `expect` is the
/// marked value after the step; leaving it out means the step is rejected.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureStep {
    pub key: Option<String>,
    pub paste: Option<String>,
    #[serde(default)]
    pub finalize: bool,
    pub expect: Option<String>,
}

impl FixtureStep {
    fn action(&self, case_id: &str) -> Action {
        match (&self.key, &self.paste, self.finalize) {
            (Some(key), None, false) => {
                let key: NumpadKey = key
                    .parse()
                    .unwrap_or_else(|err| panic!("case '{case_id}': {err}"));
                Action::Key(key)
            }
            (None, Some(text), false) => Action::Paste(text.clone()),
            (None, None, true) => Action::Finalize,
            _ => panic!("case '{case_id}': each step needs exactly one of key, paste, finalize"),
        }
    }

    fn expected_outcome(&self) -> String {
        match &self.expect {
            Some(marked) => format_marked(&parse_marked(marked)),
            None => "rejected".to_string(),
        }
    }
}

enum Action {
    Key(NumpadKey),
    Paste(String),
    Finalize,
}

impl Action {
    fn label(&self) -> String {
        match self {
            Action::Key(key) => format!("key {key}"),
            Action::Paste(text) => format!("paste \"{}\"", crate::escape_text(text)),
            Action::Finalize => "finalize".to_string(),
        }
    }
}

pub fn load_fixture(path: &Path) -> PolicyFixture {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read policy fixture {path:?}: {err}"));
    let fixture: PolicyFixture = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse policy fixture {path:?}: {err}"));
    assert_eq!(
        fixture.format, POLICY_FIXTURE_FORMAT_V1,
        "unsupported format in {path:?}"
    );
    assert!(!fixture.cases.is_empty(), "fixture {path:?} has no cases");
    fixture
}

/// Every `*.toml` fixture under `dir`, sorted by path.
pub fn load_fixture_dir(dir: &Path) -> Vec<(PathBuf, PolicyFixture)> {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("failed to read fixture dir {dir:?}: {err}"));
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();
    paths
        .into_iter()
        .map(|path| {
            let fixture = load_fixture(&path);
            (path, fixture)
        })
        .collect()
}

/// Replay a case and return `(expected, actual)` transcript lines.
///
/// Rejected steps leave the running value unchanged, so later steps see the
/// same value the host would have stored.
pub fn replay(case: &FixtureCase) -> (Vec<String>, Vec<String>) {
    let policy = Policy::from_config(case.policy)
        .unwrap_or_else(|err| panic!("case '{}': invalid policy: {err}", case.id));
    let mut value: NumericValue = parse_marked(&case.start);
    let mut expected = Vec::with_capacity(case.steps.len());
    let mut actual = Vec::with_capacity(case.steps.len());
    for (i, step) in case.steps.iter().enumerate() {
        let action = step.action(&case.id);
        let label = format!("{}: {}", i + 1, action.label());
        expected.push(format!("{label} -> {}", step.expected_outcome()));

        let result = match &action {
            Action::Key(key) => policy.apply(key, &value),
            Action::Paste(text) => policy.replace(&value, value.edit_range(), text),
            Action::Finalize => EditResult::Updated(policy.finalize_display(&value)),
        };
        let outcome = match result {
            EditResult::Rejected => "rejected".to_string(),
            EditResult::Updated(next) => {
                value = next;
                format_marked(&value)
            }
        };
        actual.push(format!("{label} -> {outcome}"));
    }
    (expected, actual)
}
