pub mod events;
pub mod factory;
pub mod log_publisher;
pub mod memory_publisher;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Memory,
    Log,
}
