//! Store service module for gRPC communication

mod client;
mod proto;
mod traits;

pub use client::{StoreClient, DEFAULT_ADDRESS};
pub use traits::{ActionReply, CreateAction, RejectionKind};

#[cfg(test)]
pub use traits::MockCreateAction;
