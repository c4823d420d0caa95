//! Span definitions per pipeline stage: retrieval, page fetch, rollup, render.

/// Create a retrieval span covering a whole paginated fetch.
#[macro_export]
macro_rules! retrieval_span {
    ($endpoint:expr) => {
        ::tracing::info_span!("estatus.retrieval", endpoint = %$endpoint)
    };
}

/// Create a span for one page request.
#[macro_export]
macro_rules! page_span {
    ($page:expr) => {
        ::tracing::debug_span!("estatus.page", page = $page)
    };
}

/// Create a rollup span.
#[macro_export]
macro_rules! rollup_span {
    ($event_count:expr) => {
        ::tracing::info_span!("estatus.rollup", event_count = $event_count)
    };
}

/// Create a render span.
#[macro_export]
macro_rules! render_span {
    ($format:expr, $entity_count:expr) => {
        ::tracing::info_span!("estatus.render", format = %$format, entity_count = $entity_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RETRIEVAL: &str = "estatus.retrieval";
    pub const PAGE: &str = "estatus.page";
    pub const ROLLUP: &str = "estatus.rollup";
    pub const RENDER: &str = "estatus.render";
}
