use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines type of event for domain changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
    Borrowed,
    Returned,
}

// DomainEvent abstracts domain event for data changes
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Added, metadata, data)
    }

    pub fn updated<T: Serialize>(name: &str, group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Updated, metadata, data)
    }

    pub fn deleted<T: Serialize>(name: &str, group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Deleted, metadata, data)
    }

    pub fn borrowed<T: Serialize>(name: &str, group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Borrowed, metadata, data)
    }

    pub fn returned<T: Serialize>(name: &str, group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Returned, metadata, data)
    }

    fn build<T: Serialize>(name: &str, group: &str, key: &str, kind: DomainEventType,
                           metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(data)?;
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: metadata.clone(),
            json_data: json,
            created_at: Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};

    #[test]
    fn test_should_build_added() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("name", "group", "key", &HashMap::from([("k".to_string(), "v".to_string())]), &data).expect("build event");
        assert_eq!("name", event.name.as_str());
        assert_eq!("key", event.key.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
        assert_eq!(Some(&"v".to_string()), event.metadata.get("k"));
    }

    #[test]
    fn test_should_build_borrowed_and_returned() {
        let borrowed = DomainEvent::borrowed("book_borrowed", "loans", "ISBN001", &HashMap::new(), &"ISBN001").expect("build event");
        let returned = DomainEvent::returned("book_returned", "loans", "ISBN001", &HashMap::new(), &"ISBN001").expect("build event");
        assert_eq!(DomainEventType::Borrowed, borrowed.kind);
        assert_eq!(DomainEventType::Returned, returned.kind);
        assert_eq!("\"ISBN001\"", borrowed.json_data.as_str());
        assert_ne!(borrowed.event_id, returned.event_id);
    }

    #[test]
    fn test_should_serialize_event_round_trip() {
        let event = DomainEvent::deleted("books", "books", "key", &HashMap::new(), &"key").expect("build event");
        let json = serde_json::to_string(&event).expect("should serialize");
        let parsed: DomainEvent = serde_json::from_str(json.as_str()).expect("should deserialize");
        assert_eq!(event.event_id, parsed.event_id);
        assert_eq!(DomainEventType::Deleted, parsed.kind);
    }
}
