pub mod bound_mode;

pub use bound_mode::BoundMode;
