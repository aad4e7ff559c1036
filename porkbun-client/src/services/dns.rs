use crate::client::Client;
use crate::context::Context;
use crate::error::Result;
use crate::path::dns_path;
use crate::types::{
    CreateRecordRequest, CreateRecordResponse, DeleteRecordByTypeRequest, DeleteRecordRequest,
    DeleteRecordResponse, DnsRecord, DnsRecordType, EditRecord, EditRecordRequest,
    EditRecordResponse, EditRecordTypeRequest, EditTypeRecord, GetRecordsRequest,
    GetRecordsResponse,
};

/// DNS record management.
///
/// Record ids are the numeric ids returned by [`get_records`](Self::get_records)
/// and [`create_record`](Self::create_record). `subdomain` is the label part
/// only (`"www"`), `None` addresses the root.
#[derive(Debug, Clone, Copy)]
pub struct DnsService<'a> {
    client: &'a Client,
}

impl<'a> DnsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// All records of `domain`, or only the one with `id`.
    pub async fn get_records(
        &self,
        ctx: Option<&Context>,
        domain: &str,
        id: Option<i64>,
    ) -> Result<GetRecordsResponse> {
        self.client
            .post(
                ctx,
                &dns_path("retrieve", &[domain.into(), id.into()])?,
                Some(GetRecordsRequest::default()),
            )
            .await
    }

    /// Records matching a type and, optionally, a subdomain.
    pub async fn get_records_by_type(
        &self,
        ctx: Option<&Context>,
        domain: &str,
        record_type: &DnsRecordType,
        subdomain: Option<&str>,
    ) -> Result<GetRecordsResponse> {
        let path = dns_path(
            "retrieveByNameType",
            &[domain.into(), record_type.into(), subdomain.into()],
        )?;
        self.client
            .post(ctx, &path, Some(GetRecordsRequest::default()))
            .await
    }

    /// Creates `record`; its `id` is ignored. `name` is the subdomain part.
    pub async fn create_record(
        &self,
        ctx: Option<&Context>,
        domain: &str,
        record: DnsRecord,
    ) -> Result<CreateRecordResponse> {
        let request = CreateRecordRequest {
            credentials: Default::default(),
            record: DnsRecord { id: None, ..record },
        };
        self.client
            .post(ctx, &dns_path("create", &[domain.into()])?, Some(request))
            .await
    }

    pub async fn edit_record(
        &self,
        ctx: Option<&Context>,
        domain: &str,
        id: i64,
        record: EditRecord,
    ) -> Result<EditRecordResponse> {
        let request = EditRecordRequest {
            credentials: Default::default(),
            record,
        };
        self.client
            .post(ctx, &dns_path("edit", &[domain.into(), id.into()])?, Some(request))
            .await
    }

    /// Edits every record matching the type and subdomain.
    pub async fn edit_record_by_type(
        &self,
        ctx: Option<&Context>,
        domain: &str,
        record_type: &DnsRecordType,
        subdomain: Option<&str>,
        record: EditTypeRecord,
    ) -> Result<EditRecordResponse> {
        let path = dns_path(
            "editByNameType",
            &[domain.into(), record_type.into(), subdomain.into()],
        )?;
        let request = EditRecordTypeRequest {
            credentials: Default::default(),
            record,
        };
        self.client.post(ctx, &path, Some(request)).await
    }

    pub async fn delete_record(
        &self,
        ctx: Option<&Context>,
        domain: &str,
        id: i64,
    ) -> Result<DeleteRecordResponse> {
        self.client
            .post(
                ctx,
                &dns_path("delete", &[domain.into(), id.into()])?,
                Some(DeleteRecordRequest::default()),
            )
            .await
    }

    /// Deletes every record matching the type and subdomain.
    pub async fn delete_record_by_type(
        &self,
        ctx: Option<&Context>,
        domain: &str,
        record_type: &DnsRecordType,
        subdomain: Option<&str>,
    ) -> Result<DeleteRecordResponse> {
        let path = dns_path(
            "deleteByNameType",
            &[domain.into(), record_type.into(), subdomain.into()],
        )?;
        self.client
            .post(ctx, &path, Some(DeleteRecordByTypeRequest::default()))
            .await
    }
}
