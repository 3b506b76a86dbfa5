pub mod helmet;
pub mod suppress;
pub mod triple_riding;

pub use helmet::has_helmet_violation;
pub use suppress::{suppress_duplicates, Suppress};
pub use triple_riding::{has_triple_riding_violation, RiderCluster};
