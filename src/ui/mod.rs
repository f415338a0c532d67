pub mod markers;
pub mod panels;
pub mod plot;
