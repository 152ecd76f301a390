mod model;
mod repository;

pub use model::RateRowDB;
pub use repository::SnapshotRepository;
