pub mod crop;
pub mod shared;
