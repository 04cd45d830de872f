pub mod memory_repository;

use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

pub trait Repository<Entity: Identifiable> {
    // create an entity
    fn create(&mut self, entity: Entity) -> LibraryResult<usize>;

    // replaces an entity in place, keeping its position
    fn update(&mut self, entity: Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &Entity::Key) -> LibraryResult<&Entity>;

    // delete an entity
    fn delete(&mut self, id: &Entity::Key) -> LibraryResult<Entity>;

    fn exists(&self, id: &Entity::Key) -> bool {
        self.get(id).is_ok()
    }

    // all entities in insertion order
    fn records(&self) -> &[Entity];
}
