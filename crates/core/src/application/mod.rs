// Application Layer - Use Cases

pub mod maintenance;
pub mod mqsc;
pub mod shutdown;

// Re-exports
pub use maintenance::SessionSweeper;
pub use mqsc::{GenerateRequest, MqscService, Submission};
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};
