mod health;
mod predict;

pub use health::{health_check, health_routes, index, HealthResponse, INDEX_TEXT};
pub use predict::{predict, predict_routes, PredictRequest};
