use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher buffers events until a caller drains them.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    events: Vec<DomainEvent>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&mut self, event: DomainEvent) -> Result<(), LibraryError> {
        self.events.push(event);
        Ok(())
    }

    fn drain(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}
