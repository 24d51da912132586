pub mod forwarding;
pub mod probe_client;
pub mod transport;

pub use probe_client::HickoryProbeClient;
