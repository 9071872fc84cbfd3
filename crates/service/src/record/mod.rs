//! Kind-independent reconciliation: gateway, transform, service.

pub mod repository;
pub mod service;
pub mod transform;

pub use repository::RecordRepository;
pub use service::RecordService;
pub use transform::Transform;
