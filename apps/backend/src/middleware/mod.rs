pub mod cors;
pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

pub use cors::cors_middleware;
pub use request_trace::RequestTrace;
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;

/// Extension type carrying the per-request trace id.
#[derive(Debug, Clone)]
pub struct TraceId(pub String);
