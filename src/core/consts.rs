pub const NROWS: usize = 5;
pub const NCOLS: usize = 5;
pub const CHANCE_LIGHT_STARTS_ON: f64 = 0.5;
