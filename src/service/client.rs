//! gRPC client for communicating with the DailySales store service
//!
//! The channel connects lazily, so building a client never fails on an
//! unreachable server; the first submission reports it instead.

use super::proto::{self, CreateStoreRequest, CreateStoreResponse, StoreErrorKind};
use super::traits::{ActionReply, CreateAction, RejectionKind};
use crate::state::FormValues;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};

/// Default store service address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:50061";

/// Client for the store service
#[derive(Debug, Clone)]
pub struct StoreClient {
    channel: Channel,
    address: String,
}

impl StoreClient {
    /// Create a client for `address` without connecting yet
    pub fn new(address: &str) -> Result<Self> {
        let channel = Endpoint::from_shared(address.to_string())
            .map_err(|e| anyhow!("Invalid store service address {address}: {e}"))?
            .connect_lazy();

        Ok(Self {
            channel,
            address: address.to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    async fn create_store(&self, request: CreateStoreRequest) -> Result<ActionReply> {
        let mut grpc = tonic::client::Grpc::new(self.channel.clone());
        grpc.ready()
            .await
            .map_err(|e| anyhow!("Store service unavailable at {}: {}", self.address, e))?;

        let codec: ProstCodec<CreateStoreRequest, CreateStoreResponse> = ProstCodec::default();
        let path = PathAndQuery::from_static(proto::CREATE_STORE_PATH);

        match grpc.unary(tonic::Request::new(request), path, codec).await {
            Ok(response) => Ok(reply_from_response(response.into_inner())),
            Err(status) if status.code() == tonic::Code::AlreadyExists => {
                Ok(ActionReply::Rejected {
                    kind: RejectionKind::DuplicateName,
                    message: status.message().to_string(),
                })
            }
            Err(status) => Err(anyhow!("Failed to create store: {}", status)),
        }
    }
}

#[async_trait]
impl CreateAction for StoreClient {
    async fn create(&self, values: FormValues) -> Result<ActionReply> {
        self.create_store(request_from_values(&values)).await
    }
}

fn request_from_values(values: &FormValues) -> CreateStoreRequest {
    let get = |name: &str| values.get(name).cloned().unwrap_or_default();
    CreateStoreRequest {
        name: get("name").trim().to_string(),
        description: get("description"),
        address: get("address"),
    }
}

fn reply_from_response(response: CreateStoreResponse) -> ActionReply {
    if response.success {
        if let Some(store) = response.store.filter(|s| !s.id.is_empty()) {
            return ActionReply::Created { id: store.id };
        }
        return ActionReply::Rejected {
            kind: RejectionKind::Other,
            message: "Store service reported success without a store id".to_string(),
        };
    }

    let kind = match StoreErrorKind::try_from(response.error_kind) {
        Ok(StoreErrorKind::DuplicateName) => RejectionKind::DuplicateName,
        _ => RejectionKind::Other,
    };
    ActionReply::Rejected {
        kind,
        message: response.error,
    }
}
