pub mod assistant;
pub mod completion_client;
pub mod metrics_manager;
