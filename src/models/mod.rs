// Model registry, simulated sentence encoders and the session that holds
// the currently loaded encoder.

pub mod encoder;
pub mod registry;
pub mod session;
pub mod traits;
