pub mod handlers;
mod router;

pub use router::create_router;
