// Application layer - Use cases and the repository contract
pub mod analytics_service;
pub mod record_repository;
pub mod record_service;
