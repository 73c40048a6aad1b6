pub mod api;
pub mod catalogue;
pub mod error;
pub mod query;
pub mod recommender;
pub mod tfidf;
