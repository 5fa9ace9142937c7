pub mod clean;
pub mod region;

pub use clean::{CleanStats, clean};
pub use region::{standardize_region_codes, us_states};
