pub mod wheel;

pub use wheel::Wheel;
