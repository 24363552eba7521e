// Domain layer - Tasting records and the analytics engine
pub mod analytics;
pub mod filter;
pub mod record;
