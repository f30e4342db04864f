pub mod definition;
pub mod registry;

pub use definition::{NpcKind, NpcProfile};
pub use registry::NpcRegistry;
