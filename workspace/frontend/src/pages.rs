pub mod trends;
pub mod urgent;
