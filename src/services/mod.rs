pub mod recommender;
pub mod similarity;
pub mod sources;

pub use recommender::Recommender;
pub use similarity::pearson;
