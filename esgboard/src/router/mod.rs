pub mod batch;
pub mod lookup;
pub mod views;
