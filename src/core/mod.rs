pub mod aggregate;
pub mod budget;
pub mod densify;
pub mod error;
pub mod models;
pub mod rank;
pub mod render;
pub mod report;
pub mod trend;
pub mod window;
