mod quad_mul;
mod cubic_mul;

pub use quad_mul::ModularQuadraticMultiplies;
pub use cubic_mul::ModularCubicMultiplies;
