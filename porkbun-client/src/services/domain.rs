use crate::client::Client;
use crate::context::Context;
use crate::error::Result;
use crate::path::domain_path;
use crate::types::{DomainListOptions, ListDomainsRequest, ListDomainsResponse};

/// Domain listing, nameservers and URL forwarding.
#[derive(Debug, Clone, Copy)]
pub struct DomainsService<'a> {
    pub(super) client: &'a Client,
}

impl<'a> DomainsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the domains on the account, 1000 per page.
    pub async fn list_domains(
        &self,
        ctx: Option<&Context>,
        options: Option<DomainListOptions>,
    ) -> Result<ListDomainsResponse> {
        let request = ListDomainsRequest::from(options.unwrap_or_default());
        self.client
            .post(ctx, &domain_path("listAll", &[])?, Some(request))
            .await
    }
}
