use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::log_publisher::LogPublisher;
use crate::gateway::memory_publisher::MemoryPublisher;

pub fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Memory => {
            Box::new(MemoryPublisher::new())
        }
        GatewayPublisherVia::Log => {
            Box::new(LogPublisher::new())
        }
    }
}
