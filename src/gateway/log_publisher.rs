use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every event to the tracing subscriber and retains nothing.
#[derive(Debug, Default)]
pub struct LogPublisher {
    published: usize,
}

impl LogPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> usize {
        self.published
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&mut self, event: DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(&event)?;
        info!(event = json.as_str(), "published {} event {}", event.name, event.event_id);
        self.published += 1;
        Ok(())
    }

    fn drain(&mut self) -> Vec<DomainEvent> {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::log_publisher::LogPublisher;

    #[test]
    fn test_should_publish_to_log() {
        let mut publisher = LogPublisher::new();
        let event = DomainEvent::updated("members", "members", "101", &HashMap::new(), &101).expect("build event");
        publisher.publish(event).expect("should publish");
        assert_eq!(1, publisher.published());
        assert!(publisher.drain().is_empty());
    }
}
