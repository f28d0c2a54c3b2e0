//! gRPC layer - maps wire requests onto the service trait.

mod user_grpc;

pub use user_grpc::UserGrpcService;
