pub mod collinear;
pub mod gift_wrapping;
