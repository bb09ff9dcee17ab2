mod debounce;
mod error;
mod local;
mod orchestrator;
mod render;
mod session;
mod source;

pub use debounce::{Debouncer, SearchEvent, DEFAULT_QUIESCENCE};
pub use error::SourceError;
pub use local::LocalSource;
pub use orchestrator::{Orchestrator, SearchOutcome, SearchToken};
pub use render::{render_cards, results_summary, MovieCard, EMPTY_RESULTS_MESSAGE};
pub use session::Session;
pub use source::{GatewaySource, MovieSource, SearchRequest, UpstreamSource};

pub type Result<T> = std::result::Result<T, SourceError>;
