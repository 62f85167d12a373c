pub mod ci;
pub mod coverage;
