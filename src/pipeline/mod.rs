pub mod averages;
pub mod scores;
