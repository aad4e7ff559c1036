use super::DomainsService;
use crate::context::Context;
use crate::error::Result;
use crate::path::domain_path;
use crate::types::{
    GetNameServersRequest, GetNameServersResponse, NameServers, UpdateNameServersRequest,
    UpdateNameServersResponse,
};

impl DomainsService<'_> {
    /// Authoritative nameservers of `domain`, in registry order.
    pub async fn get_name_servers(
        &self,
        ctx: Option<&Context>,
        domain: &str,
    ) -> Result<GetNameServersResponse> {
        self.client
            .post(
                ctx,
                &domain_path("getNs", &[domain.into()])?,
                Some(GetNameServersRequest::default()),
            )
            .await
    }

    /// Replaces the nameservers of `domain`.
    pub async fn update_name_servers(
        &self,
        ctx: Option<&Context>,
        domain: &str,
        name_servers: NameServers,
    ) -> Result<UpdateNameServersResponse> {
        let request = UpdateNameServersRequest {
            ns: name_servers,
            ..Default::default()
        };
        self.client
            .post(ctx, &domain_path("updateNs", &[domain.into()])?, Some(request))
            .await
    }
}
