use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::adapters::aws::session::{request_failed, AwsSession};
use crate::core::errors::Result;
use crate::core::models::instance::IdentityCenterInstance;
use crate::core::models::page::Page;
use crate::core::traits::directory::DirectoryAdmin;

/// [`DirectoryAdmin`] backed by the SSO Admin API.
pub struct SsoAdminClient {
    client: aws_sdk_ssoadmin::Client,
    runtime: Arc<Runtime>,
}

impl SsoAdminClient {
    pub fn new(session: &AwsSession) -> Self {
        Self {
            client: aws_sdk_ssoadmin::Client::new(session.sdk_config()),
            runtime: session.runtime(),
        }
    }
}

impl DirectoryAdmin for SsoAdminClient {
    fn list_instances(&self, next_token: Option<&str>) -> Result<Page<IdentityCenterInstance>> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .list_instances()
                    .set_next_token(next_token.map(str::to_string))
                    .send(),
            )
            .map_err(|e| request_failed("sso-admin", "ListInstances", e))?;

        // An instance without an identity store cannot be queried for users.
        let items = output
            .instances()
            .iter()
            .filter_map(|instance| {
                Some(IdentityCenterInstance {
                    identity_store_id: instance.identity_store_id()?.to_string(),
                    instance_arn: instance.instance_arn().unwrap_or_default().to_string(),
                })
            })
            .collect();

        Ok(Page {
            items,
            next_token: output.next_token().map(str::to_string),
        })
    }
}
