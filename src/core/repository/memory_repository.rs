use std::collections::HashMap;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// Stamped is implemented by entities that carry a version and modification time.
pub trait Stamped {
    fn touch(&mut self, version: i64);
}

// MemoryRepository keeps records in insertion order with a key to position index
// so lookups stay constant-time while iteration and removal preserve ordering.
pub struct MemoryRepository<Entity: Identifiable> {
    name: String,
    records: Vec<Entity>,
    index: HashMap<Entity::Key, usize>,
}

impl<Entity: Identifiable> MemoryRepository<Entity> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            records: vec![],
            index: HashMap::new(),
        }
    }

    fn position(&self, id: &Entity::Key) -> LibraryResult<usize> {
        self.index.get(id).copied().ok_or_else(|| LibraryError::not_found(
            format!("{} with id {} not found", self.name, id).as_str()))
    }

    fn reindex_from(&mut self, start: usize) {
        for (pos, record) in self.records.iter().enumerate().skip(start) {
            self.index.insert(record.id(), pos);
        }
    }
}

impl<Entity: Identifiable + Stamped> Repository<Entity> for MemoryRepository<Entity> {
    fn create(&mut self, entity: Entity) -> LibraryResult<usize> {
        let id = entity.id();
        if self.index.contains_key(&id) {
            return Err(LibraryError::duplicate_key(
                format!("{} with id {} already exists", self.name, id).as_str()));
        }
        self.index.insert(id, self.records.len());
        self.records.push(entity);
        Ok(1)
    }

    fn update(&mut self, mut entity: Entity) -> LibraryResult<usize> {
        let pos = self.position(&entity.id())?;
        entity.touch(self.records[pos].version() + 1);
        self.records[pos] = entity;
        Ok(1)
    }

    fn get(&self, id: &Entity::Key) -> LibraryResult<&Entity> {
        let pos = self.position(id)?;
        Ok(&self.records[pos])
    }

    fn delete(&mut self, id: &Entity::Key) -> LibraryResult<Entity> {
        let pos = self.position(id)?;
        self.index.remove(id);
        let removed = self.records.remove(pos);
        self.reindex_from(pos);
        Ok(removed)
    }

    fn records(&self) -> &[Entity] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::library::ErrorKind;
    use crate::core::repository::memory_repository::{MemoryRepository, Stamped};
    use crate::core::repository::Repository;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        key: u32,
        label: String,
        version: i64,
    }

    impl Item {
        fn new(key: u32, label: &str) -> Self {
            Self { key, label: label.to_string(), version: 0 }
        }
    }

    impl Identifiable for Item {
        type Key = u32;

        fn id(&self) -> u32 {
            self.key
        }

        fn version(&self) -> i64 {
            self.version
        }
    }

    impl Stamped for Item {
        fn touch(&mut self, version: i64) {
            self.version = version;
        }
    }

    fn keys(repo: &MemoryRepository<Item>) -> Vec<u32> {
        repo.records().iter().map(|i| i.key).collect()
    }

    #[test]
    fn test_should_create_and_get() {
        let mut repo = MemoryRepository::new("items");
        assert_eq!(1, repo.create(Item::new(1, "one")).expect("should create"));
        assert_eq!("one", repo.get(&1).expect("should get").label.as_str());
        assert!(repo.exists(&1));
        assert!(!repo.exists(&2));
    }

    #[test]
    fn test_should_reject_duplicate() {
        let mut repo = MemoryRepository::new("items");
        repo.create(Item::new(1, "one")).expect("should create");
        let err = repo.create(Item::new(1, "other")).expect_err("should reject duplicate");
        assert_eq!(ErrorKind::DuplicateKey, err.kind());
        assert_eq!("one", repo.get(&1).expect("should get").label.as_str());
    }

    #[test]
    fn test_should_update_in_place_and_bump_version() {
        let mut repo = MemoryRepository::new("items");
        repo.create(Item::new(1, "one")).expect("should create");
        repo.create(Item::new(2, "two")).expect("should create");
        let mut item = repo.get(&1).expect("should get").clone();
        item.label = "uno".to_string();
        repo.update(item).expect("should update");
        let loaded = repo.get(&1).expect("should get");
        assert_eq!("uno", loaded.label.as_str());
        assert_eq!(1, loaded.version);
        assert_eq!(vec![1, 2], keys(&repo));
        assert_eq!(ErrorKind::NotFound, repo.update(Item::new(9, "x")).expect_err("missing").kind());
    }

    #[test]
    fn test_should_delete_preserving_order() {
        let mut repo = MemoryRepository::new("items");
        for key in 1..=4 {
            repo.create(Item::new(key, "item")).expect("should create");
        }
        let removed = repo.delete(&2).expect("should delete");
        assert_eq!(2, removed.key);
        assert_eq!(vec![1, 3, 4], keys(&repo));
        assert_eq!(4, repo.get(&4).expect("index should follow shift").key);
        assert_eq!(ErrorKind::NotFound, repo.delete(&2).expect_err("already deleted").kind());
    }
}
