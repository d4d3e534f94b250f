mod auth;
mod filter;
mod http;
mod toolset;

pub use auth::McpAuth;
pub use filter::{
    AnnotationPredicate, AnnotationToolFilter, DESTRUCTIVE_HINT, DescriptorPredicate, FilterSpec,
    FilterValue, OPEN_WORLD_HINT, READ_ONLY_HINT, TOOLSETS_ANNOTATION, ToolDescriptor,
};
pub use http::McpHttpClientBuilder;
pub use toolset::McpToolset;
