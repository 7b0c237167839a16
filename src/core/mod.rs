pub mod add;
pub mod filter;
pub mod log;
pub mod normalize;
pub mod shift;
