mod fix;

pub use fix::*;
