use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::adapters::aws::session::{request_failed, AwsSession};
use crate::core::errors::Result;
use crate::core::models::directory_user::DirectoryUser;
use crate::core::models::page::Page;
use crate::core::traits::directory::Directory;

/// [`Directory`] backed by the Identity Store API.
pub struct IdentityStoreClient {
    client: aws_sdk_identitystore::Client,
    runtime: Arc<Runtime>,
}

impl IdentityStoreClient {
    pub fn new(session: &AwsSession) -> Self {
        Self {
            client: aws_sdk_identitystore::Client::new(session.sdk_config()),
            runtime: session.runtime(),
        }
    }
}

impl Directory for IdentityStoreClient {
    fn list_users(
        &self,
        identity_store_id: &str,
        next_token: Option<&str>,
    ) -> Result<Page<DirectoryUser>> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .list_users()
                    .identity_store_id(identity_store_id)
                    .set_next_token(next_token.map(str::to_string))
                    .send(),
            )
            .map_err(|e| request_failed("identitystore", "ListUsers", e))?;

        let items: Vec<DirectoryUser> = output
            .users()
            .iter()
            .map(|user| DirectoryUser {
                user_name: user.user_name().unwrap_or_default().to_string(),
                display_name: user.display_name().unwrap_or_default().to_string(),
                user_id: user.user_id().to_string(),
            })
            .collect();

        tracing::debug!(
            identity_store_id,
            users = items.len(),
            more = output.next_token().is_some(),
            "fetched user page"
        );

        Ok(Page {
            items,
            next_token: output.next_token().map(str::to_string),
        })
    }
}
