pub mod columns;
pub mod config;
pub mod countries;
pub mod dataset;
pub mod load;
pub mod pipeline;
pub mod render;
pub mod years;
