use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

pub trait EventPublisher {
    fn publish(&mut self, event: DomainEvent) -> Result<(), LibraryError>;

    // hands back events retained since the last drain
    fn drain(&mut self) -> Vec<DomainEvent>;
}
