//! Static tool catalog shared by every tenant.

use serde_json::{Value, json};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    ListAccounts,
    GetCampaignPerformance,
}

impl ToolKind {
    pub const ALL: [Self; 2] = [Self::ListAccounts, Self::GetCampaignPerformance];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ListAccounts => "list_accounts",
            Self::GetCampaignPerformance => "get_campaign_performance",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    #[must_use]
    pub fn descriptor(self) -> &'static ToolDescriptor {
        // CATALOG is built in `ALL` order.
        &CATALOG[self as usize]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

impl ToolDescriptor {
    /// Wire shape: `{name, description, inputSchema}`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema,
        })
    }
}

static CATALOG: LazyLock<Vec<ToolDescriptor>> = LazyLock::new(|| {
    ToolKind::ALL
        .into_iter()
        .map(|kind| match kind {
            ToolKind::ListAccounts => ToolDescriptor {
                name: kind.name(),
                description: "List all Google Ads accounts",
                input_schema: json!({
                    "type": "object",
                    "properties": {},
                    "required": []
                }),
            },
            ToolKind::GetCampaignPerformance => ToolDescriptor {
                name: kind.name(),
                description: "Get campaign performance data",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "customer_id": {
                            "type": "string",
                            "description": "Google Ads customer ID"
                        },
                        "date_range": {
                            "type": "string",
                            "description": "Date range (LAST_7_DAYS, LAST_30_DAYS, etc.)"
                        }
                    },
                    "required": ["customer_id"]
                }),
            },
        })
        .collect()
});

/// Compiled input schemas, indexed like `CATALOG`.
static VALIDATORS: LazyLock<Vec<Result<jsonschema::Validator, String>>> = LazyLock::new(|| {
    CATALOG
        .iter()
        .map(|tool| {
            jsonschema::validator_for(&tool.input_schema)
                .map_err(|e| format!("Invalid tool schema for '{}': {e}", tool.name))
        })
        .collect()
});

impl ToolKind {
    fn validator(self) -> Result<&'static jsonschema::Validator, &'static str> {
        VALIDATORS[self as usize].as_ref().map_err(String::as_str)
    }
}

/// The full catalog, in a fixed order.
#[must_use]
pub fn list_tools() -> &'static [ToolDescriptor] {
    &CATALOG
}

/// The catalog as the `tools/list` result payload.
#[must_use]
pub fn list_tools_json() -> Value {
    Value::Array(list_tools().iter().map(ToolDescriptor::to_json).collect())
}

/// Whether the schema declares any properties or required keys.
fn accepts_arguments(schema: &Value) -> bool {
    let non_empty = |key: &str| {
        schema.get(key).is_some_and(|v| match v {
            Value::Object(m) => !m.is_empty(),
            Value::Array(a) => !a.is_empty(),
            _ => false,
        })
    };
    non_empty("properties") || non_empty("required")
}

/// Check `args` against the tool's input schema.
///
/// Tools whose schema declares no properties ignore their arguments entirely.
/// Unknown properties are tolerated.
///
/// # Errors
///
/// Returns a message describing the missing parameters or the first schema violation.
pub fn validate_arguments(kind: ToolKind, args: &Value) -> Result<(), String> {
    let tool = kind.descriptor();
    let schema = &tool.input_schema;
    if !accepts_arguments(schema) {
        return Ok(());
    }
    let args_obj = args.as_object();

    let missing: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .filter(|r| !args_obj.is_some_and(|o| o.contains_key(*r)))
        .collect();
    if let Some(first) = missing.first() {
        return Err(if missing.len() == 1 {
            format!("Invalid params: missing required parameter '{first}'")
        } else {
            format!(
                "Invalid params: missing required parameters {}",
                missing
                    .iter()
                    .map(|m| format!("'{m}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        });
    }

    let compiled = kind.validator()?;
    let violations: Vec<String> = compiled
        .iter_errors(args)
        .filter(|e| {
            // Required properties are reported above with a nicer shape.
            !matches!(
                e.kind(),
                jsonschema::error::ValidationErrorKind::Required { .. }
            )
        })
        .map(|e| {
            let path = e.instance_path().to_string();
            if path.is_empty() {
                e.to_string()
            } else {
                format!("{path}: {e}")
            }
        })
        .collect();

    match violations.as_slice() {
        [] => Ok(()),
        [only] => Err(format!("Invalid params: {only}")),
        [first, rest @ ..] => Err(format!(
            "Invalid params: {first} (and {} more violation(s))",
            rest.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_fixed_and_serializes_input_schema_key() {
        let tools = list_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name).collect();
        assert_eq!(names, ["list_accounts", "get_campaign_performance"]);

        let v = list_tools_json();
        assert_eq!(v[1]["inputSchema"]["required"], json!(["customer_id"]));
        assert!(v[0].get("input_schema").is_none());
        assert_eq!(v.to_string(), list_tools_json().to_string());
    }

    #[test]
    fn kind_lookup_matches_descriptor() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.descriptor().name, kind.name());
        }
        assert_eq!(ToolKind::from_name("does_not_exist"), None);
    }

    #[test]
    fn validation_reports_missing_required_and_type_errors() {
        let tool = ToolKind::GetCampaignPerformance;

        let err = validate_arguments(tool, &json!({})).unwrap_err();
        assert_eq!(err, "Invalid params: missing required parameter 'customer_id'");

        let err = validate_arguments(tool, &json!({"customer_id": 42})).unwrap_err();
        assert!(err.contains("/customer_id"), "{err}");

        validate_arguments(tool, &json!({"customer_id": "111", "date_range": "LAST_7_DAYS"}))
            .expect("valid");
        validate_arguments(tool, &json!({"customer_id": "111", "extra": true}))
            .expect("unknown properties are tolerated");
    }

    #[test]
    fn list_accounts_ignores_arguments_of_any_shape() {
        let tool = ToolKind::ListAccounts;
        for args in [json!({}), json!({"anything": 1}), json!("nope"), json!([1, 2]), json!(7)] {
            validate_arguments(tool, &args).expect("arguments are ignored");
        }
    }

    #[test]
    fn every_catalog_schema_compiles() {
        for kind in ToolKind::ALL {
            kind.validator().expect("schema compiles");
        }
    }
}
