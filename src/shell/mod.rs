// Composition root for the time_logs service.
//
// Responsibilities
// - Build the router over the injected clock and gateway.
// - Run the listener and release the gateway on shutdown.

pub mod http;
pub mod server;
pub mod state;
