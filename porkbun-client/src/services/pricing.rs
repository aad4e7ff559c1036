use crate::client::Client;
use crate::context::Context;
use crate::error::Result;
use crate::path::build_path;
use crate::types::PricingResponse;

#[derive(Debug, Clone, Copy)]
pub struct PricingService<'a> {
    client: &'a Client,
}

impl<'a> PricingService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Registration, renewal and transfer prices of every TLD.
    ///
    /// Public endpoint: no payload, no credentials.
    pub async fn list_pricing(&self, ctx: Option<&Context>) -> Result<PricingResponse> {
        self.client
            .post_empty(ctx, &build_path("pricing", "get", &[])?)
            .await
    }
}
