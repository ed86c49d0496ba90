pub mod payload;
pub mod series;
