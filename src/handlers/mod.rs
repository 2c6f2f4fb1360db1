pub mod docs;
pub mod health;
pub mod host;
pub mod planets;

pub use docs::api_docs;
pub use health::{liveness, readiness};
pub use host::host_info;
pub use planets::lookup_planet;
