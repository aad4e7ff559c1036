use crate::client::Client;
use crate::context::Context;
use crate::error::Result;
use crate::path::ssl_path;
use crate::types::{SslRetrieveRequest, SslRetrieveResponse};

#[derive(Debug, Clone, Copy)]
pub struct SslService<'a> {
    client: &'a Client,
}

impl<'a> SslService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// The free certificate bundle issued for `domain`.
    pub async fn retrieve(
        &self,
        ctx: Option<&Context>,
        domain: &str,
    ) -> Result<SslRetrieveResponse> {
        self.client
            .post(
                ctx,
                &ssl_path("retrieve", &[domain.into()])?,
                Some(SslRetrieveRequest::default()),
            )
            .await
    }
}
