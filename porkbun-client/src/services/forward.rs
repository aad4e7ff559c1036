use super::DomainsService;
use crate::context::Context;
use crate::error::Result;
use crate::path::domain_path;
use crate::types::{
    AddUrlForwardRequest, AddUrlForwardResponse, DeleteUrlForwardRequest,
    DeleteUrlForwardResponse, GetUrlForwardingRequest, GetUrlForwardingResponse, UrlForward,
};

impl DomainsService<'_> {
    pub async fn get_url_forwarding(
        &self,
        ctx: Option<&Context>,
        domain: &str,
    ) -> Result<GetUrlForwardingResponse> {
        self.client
            .post(
                ctx,
                &domain_path("getUrlForwarding", &[domain.into()])?,
                Some(GetUrlForwardingRequest::default()),
            )
            .await
    }

    pub async fn add_url_forward(
        &self,
        ctx: Option<&Context>,
        domain: &str,
        forward: UrlForward,
    ) -> Result<AddUrlForwardResponse> {
        let request = AddUrlForwardRequest {
            credentials: Default::default(),
            forward,
        };
        self.client
            .post(
                ctx,
                &domain_path("addUrlForward", &[domain.into()])?,
                Some(request),
            )
            .await
    }

    /// `id` is the forward id from [`get_url_forwarding`](Self::get_url_forwarding).
    pub async fn delete_url_forward(
        &self,
        ctx: Option<&Context>,
        domain: &str,
        id: &str,
    ) -> Result<DeleteUrlForwardResponse> {
        self.client
            .post(
                ctx,
                &domain_path("deleteUrlForward", &[domain.into(), id.into()])?,
                Some(DeleteUrlForwardRequest::default()),
            )
            .await
    }
}
