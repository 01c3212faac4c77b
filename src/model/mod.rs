pub mod attributes;
pub mod weights;
