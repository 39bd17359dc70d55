use crate::core::errors::{ActivityError, Result};
use crate::core::models::instance::{IdentityCenterInstance, InstanceSelection};
use crate::core::services::pagination::Paginated;
use crate::core::traits::directory::DirectoryAdmin;

/// Determines which identity store the audit runs against.
pub struct DirectoryResolver<'a> {
    admin: &'a dyn DirectoryAdmin,
    selection: InstanceSelection,
    explicit_store: Option<String>,
}

impl<'a> DirectoryResolver<'a> {
    pub fn new(admin: &'a dyn DirectoryAdmin, selection: InstanceSelection) -> Self {
        Self {
            admin,
            selection,
            explicit_store: None,
        }
    }

    /// Use this identity store id without asking the management API.
    pub fn with_explicit_store(mut self, identity_store_id: Option<String>) -> Self {
        self.explicit_store = identity_store_id;
        self
    }

    /// Return the identity store id to query users from.
    ///
    /// With [`InstanceSelection::First`] only the first page of instances is
    /// requested. With [`InstanceSelection::Single`] all pages are read and
    /// more than one instance is an error.
    pub fn resolve(&self) -> Result<String> {
        if let Some(store) = &self.explicit_store {
            tracing::debug!(identity_store_id = %store, "using configured identity store");
            return Ok(store.clone());
        }

        let mut instances = Paginated::new(|token| self.admin.list_instances(token));

        let chosen = match self.selection {
            InstanceSelection::First => instances
                .next()
                .transpose()?
                .ok_or(ActivityError::NoInstanceFound)?,
            InstanceSelection::Single => {
                let mut all: Vec<IdentityCenterInstance> = instances.collect::<Result<_>>()?;
                match all.len() {
                    0 => return Err(ActivityError::NoInstanceFound),
                    1 => all.remove(0),
                    count => return Err(ActivityError::AmbiguousInstance { count }),
                }
            }
        };

        tracing::debug!(
            instance_arn = %chosen.instance_arn,
            identity_store_id = %chosen.identity_store_id,
            "resolved identity center instance"
        );
        Ok(chosen.identity_store_id)
    }
}
