//! Tool dispatch for a resolved tenant.
//!
//! Results are mocked; nothing here performs upstream I/O.

use crate::error::ToolError;
use crate::tenant::TenantRecord;
use crate::tools::{self, ToolKind};
use serde_json::{Map, Value, json};

/// Invoke `tool_name` on behalf of `tenant`.
///
/// `arguments` of `None` or `null` are treated as an empty object.
///
/// # Errors
///
/// [`ToolError::UnknownTool`] for names outside the catalog and
/// [`ToolError::InvalidArguments`] when the arguments do not satisfy the tool schema.
pub fn invoke(
    tenant: &TenantRecord,
    tool_name: &str,
    arguments: Option<&Value>,
) -> Result<Value, ToolError> {
    tracing::info!(client_id = %tenant.id, tool = tool_name, "tool call");

    let kind =
        ToolKind::from_name(tool_name).ok_or_else(|| ToolError::UnknownTool(tool_name.into()))?;

    let empty = Value::Object(Map::new());
    let arguments = match arguments {
        None | Some(Value::Null) => &empty,
        Some(v) => v,
    };
    tools::validate_arguments(kind, arguments).map_err(ToolError::InvalidArguments)?;

    Ok(match kind {
        ToolKind::ListAccounts => list_accounts(tenant),
        ToolKind::GetCampaignPerformance => get_campaign_performance(tenant),
    })
}

/// Invoke using raw `tools/call` params (`name` + optional `arguments`).
///
/// # Errors
///
/// [`ToolError::MissingName`] when `name` is absent or not a string, otherwise as [`invoke`].
pub fn invoke_params(tenant: &TenantRecord, params: &Map<String, Value>) -> Result<Value, ToolError> {
    let name = params
        .get("name")
        .and_then(Value::as_str)
        .ok_or(ToolError::MissingName)?;
    invoke(tenant, name, params.get("arguments"))
}

fn list_accounts(tenant: &TenantRecord) -> Value {
    // TODO: replace with a customer listing via the Google Ads API using the tenant's credentials.
    json!({
        "accounts": [
            {
                "id": tenant.upstream_account_id(),
                "name": format!("{} - Google Ads", tenant.name),
                "status": "ACTIVE"
            }
        ]
    })
}

fn get_campaign_performance(tenant: &TenantRecord) -> Value {
    json!({
        "campaigns": [
            {
                "id": "123456789",
                "name": "Sample Campaign",
                "status": "ENABLED",
                "impressions": 10000,
                "clicks": 500,
                "ctr": 5.0,
                "cost_micros": 50_000_000,
                "conversions": 25
            }
        ],
        "client": tenant.name
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tenant::record;

    #[test]
    fn list_accounts_is_derived_from_tenant() {
        let tenant = record("acme", "Acme", true, "123-456-7890");
        let out = invoke(&tenant, "list_accounts", Some(&json!({"ignored": true}))).expect("call");
        assert_eq!(
            out,
            json!({"accounts": [{"id": "123-456-7890", "name": "Acme - Google Ads", "status": "ACTIVE"}]})
        );
    }

    #[test]
    fn list_accounts_succeeds_with_non_object_arguments() {
        let tenant = record("acme", "Acme", true, "111");
        for args in [json!("x"), json!([1, 2]), json!(7)] {
            let out = invoke(&tenant, "list_accounts", Some(&args)).expect("call");
            assert_eq!(out["accounts"][0]["id"], "111");
        }
    }

    #[test]
    fn campaign_performance_is_tagged_with_tenant_name() {
        let tenant = record("acme", "Acme", true, "111");
        let out = invoke(
            &tenant,
            "get_campaign_performance",
            Some(&json!({"customer_id": "111"})),
        )
        .expect("call");
        assert_eq!(out["client"], "Acme");
        assert_eq!(out["campaigns"][0]["cost_micros"], 50_000_000);
        assert_eq!(out["campaigns"][0]["ctr"], 5.0);
    }

    #[test]
    fn campaign_performance_requires_customer_id() {
        let tenant = record("acme", "Acme", true, "111");
        let err = invoke(&tenant, "get_campaign_performance", None).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(ref m) if m.contains("customer_id")));
    }

    #[test]
    fn unknown_and_unnamed_tools_are_distinct_errors() {
        let tenant = record("acme", "Acme", true, "111");
        assert_eq!(
            invoke(&tenant, "does_not_exist", None),
            Err(ToolError::UnknownTool("does_not_exist".to_string()))
        );

        let params = json!({"arguments": {}});
        let params = params.as_object().expect("object");
        assert_eq!(invoke_params(&tenant, params), Err(ToolError::MissingName));

        let params = json!({"name": "list_accounts", "arguments": null});
        let params = params.as_object().expect("object");
        assert!(invoke_params(&tenant, params).is_ok());
    }
}
