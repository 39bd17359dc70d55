use serde::Deserialize;

/// A provisioned IAM Identity Center instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityCenterInstance {
    pub instance_arn: String,
    pub identity_store_id: String,
}

/// How to choose an identity store when several instances are visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceSelection {
    /// Take the first instance the management API returns.
    #[default]
    First,
    /// Require exactly one instance and fail otherwise.
    Single,
}
