//! Wire messages of `dailysales.StoreService`
//!
//! ```proto
//! service StoreService {
//!   rpc CreateStore(CreateStoreRequest) returns (CreateStoreResponse);
//! }
//! ```

/// Fully qualified path of the CreateStore rpc
pub const CREATE_STORE_PATH: &str = "/dailysales.StoreService/CreateStore";

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateStoreRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub address: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Store {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateStoreResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub error: ::prost::alloc::string::String,
    #[prost(enumeration = "StoreErrorKind", tag = "3")]
    pub error_kind: i32,
    #[prost(message, optional, tag = "4")]
    pub store: ::core::option::Option<Store>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StoreErrorKind {
    Unspecified = 0,
    DuplicateName = 1,
    Internal = 2,
}
