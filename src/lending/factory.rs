use crate::books::factory::create_book_repository;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::lending::domain::LendingService;
use crate::lending::domain::service::LendingServiceImpl;
use crate::members::factory::create_member_repository;

pub fn create_lending_service(config: &Configuration, via: GatewayPublisherVia) -> Box<dyn LendingService> {
    let book_repo = create_book_repository();
    let member_repo = create_member_repository();
    let publisher = create_publisher(via);
    Box::new(LendingServiceImpl::new(config, book_repo, member_repo, publisher))
}
