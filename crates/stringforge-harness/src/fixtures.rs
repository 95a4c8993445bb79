//! Fixture loading and management.

use serde::{Deserialize, Serialize};

/// A single fixture test case: one format string, its typed inputs, and
/// the output (or error) it must produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// C standard section the case traces to.
    pub spec_section: String,
    /// Format string under test.
    pub format: String,
    /// Typed input arguments, in consumption order.
    #[serde(default)]
    pub inputs: Vec<CaseInput>,
    /// Expected rendered output. Absent for cases that must fail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    /// Expected error message substring. Absent for cases that must pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_error: Option<String>,
}

/// One typed argument, the JSON face of the formatter's argument stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseInput {
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(u8),
    Str(String),
    Null,
    Ptr(usize),
}

/// A collection of fixture cases for one directive family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Directive family name (e.g. "integer", "float", "errors").
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }
}

/// The built-in smoke set, used when no fixture directory is given.
#[must_use]
pub fn builtin_sets() -> Vec<FixtureSet> {
    let json = r#"[
        {
            "version": "v1",
            "family": "integer",
            "cases": [
                {"name":"signed_basic","spec_section":"C11 7.21.6.1p8 d","format":"%d","inputs":[{"int":-42}],"expected_output":"-42"},
                {"name":"signed_zero_pad","spec_section":"C11 7.21.6.1p6 0","format":"%05d","inputs":[{"int":-42}],"expected_output":"-0042"},
                {"name":"precision_min_digits","spec_section":"C11 7.21.6.1p4","format":"%.5d","inputs":[{"int":42}],"expected_output":"00042"},
                {"name":"hex_alt_form","spec_section":"C11 7.21.6.1p6 #","format":"%#x","inputs":[{"uint":255}],"expected_output":"0xff"},
                {"name":"octal_alt_form","spec_section":"C11 7.21.6.1p6 #","format":"%#o","inputs":[{"uint":8}],"expected_output":"010"},
                {"name":"star_width","spec_section":"C11 7.21.6.1p5","format":"%*d","inputs":[{"int":6},{"int":42}],"expected_output":"    42"}
            ]
        },
        {
            "version": "v1",
            "family": "float",
            "cases": [
                {"name":"fixed_default","spec_section":"C11 7.21.6.1p8 f","format":"%f","inputs":[{"float":3.14159}],"expected_output":"3.141590"},
                {"name":"fixed_rounding_carry","spec_section":"C11 7.21.6.1p8 f","format":"%.2f","inputs":[{"float":9.996}],"expected_output":"10.00"},
                {"name":"scientific","spec_section":"C11 7.21.6.1p8 e","format":"%.2e","inputs":[{"float":250.0}],"expected_output":"2.50e+02"},
                {"name":"general_fixed_style","spec_section":"C11 7.21.6.1p8 g","format":"%g","inputs":[{"float":0.0001}],"expected_output":"0.0001"},
                {"name":"general_sci_style","spec_section":"C11 7.21.6.1p8 g","format":"%g","inputs":[{"float":0.00001}],"expected_output":"1e-05"},
                {"name":"half_rounds_away","spec_section":"C11 7.21.6.1p8 f","format":"%.0f","inputs":[{"float":0.5}],"expected_output":"1"}
            ]
        },
        {
            "version": "v1",
            "family": "text",
            "cases": [
                {"name":"string_precision","spec_section":"C11 7.21.6.1p8 s","format":"%.3s","inputs":[{"str":"hello"}],"expected_output":"hel"},
                {"name":"null_string","spec_section":"glibc vfprintf","format":"%s","inputs":["null"],"expected_output":"(null)"},
                {"name":"char_width","spec_section":"C11 7.21.6.1p8 c","format":"%5c","inputs":[{"char":90}],"expected_output":"    Z"},
                {"name":"pointer","spec_section":"C11 7.21.6.1p8 p","format":"%p","inputs":[{"ptr":57005}],"expected_output":"0xdead"},
                {"name":"null_pointer","spec_section":"glibc vfprintf","format":"%p","inputs":["null"],"expected_output":"(nil)"},
                {"name":"percent_escape","spec_section":"C11 7.21.6.1p8 %","format":"100%%","inputs":[],"expected_output":"100%"}
            ]
        },
        {
            "version": "v1",
            "family": "errors",
            "cases": [
                {"name":"unterminated","spec_section":"C11 7.21.6.1p9","format":"tail%","inputs":[],"expected_error":"ended inside"},
                {"name":"unknown_conversion","spec_section":"C11 7.21.6.1p9","format":"%q","inputs":[],"expected_error":"unknown conversion"},
                {"name":"missing_argument","spec_section":"argument stream","format":"%d %d","inputs":[{"int":1}],"expected_error":"only 1 were supplied"},
                {"name":"wrong_kind","spec_section":"argument stream","format":"%f","inputs":[{"str":"x"}],"expected_error":"expects a float"}
            ]
        }
    ]"#;
    serde_json::from_str(json).expect("builtin fixtures are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sets_parse_and_cover_families() {
        let sets = builtin_sets();
        let families: Vec<&str> = sets.iter().map(|s| s.family.as_str()).collect();
        assert_eq!(families, ["integer", "float", "text", "errors"]);
        assert!(sets.iter().all(|s| !s.cases.is_empty()));
    }

    #[test]
    fn case_roundtrips_through_json() {
        let set = FixtureSet {
            version: "v1".into(),
            family: "smoke".into(),
            cases: vec![FixtureCase {
                name: "one".into(),
                spec_section: "C11".into(),
                format: "%d".into(),
                inputs: vec![CaseInput::Int(7)],
                expected_output: Some("7".into()),
                expected_error: None,
            }],
        };
        let restored = FixtureSet::from_json(&set.to_json().unwrap()).unwrap();
        assert_eq!(restored.cases[0].inputs, vec![CaseInput::Int(7)]);
        assert_eq!(restored.cases[0].expected_output.as_deref(), Some("7"));
    }
}
