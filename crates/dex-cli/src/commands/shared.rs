pub mod limit;
pub mod load;
