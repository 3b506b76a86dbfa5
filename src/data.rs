mod class_map;
mod resolver_config;
mod send_channels;

pub use class_map::ClassMap;
pub use resolver_config::ResolverConfig;
pub use send_channels::{worker_channels, SubmitState, WorkerState};
