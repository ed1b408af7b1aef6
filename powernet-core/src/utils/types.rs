/// Alias to a scalar floating type used for costs and utilization ratios.
pub type Float = f64;
