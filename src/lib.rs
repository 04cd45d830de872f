pub mod core;
pub mod books;
pub mod members;
pub mod lending;
pub mod gateway;
pub mod utils;
