pub mod correlation;

pub use correlation::{CorrelationId, CorrelationIdExt, CorrelationIdMiddleware, CORRELATION_HEADER};
