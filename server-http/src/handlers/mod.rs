pub mod greeting;
pub mod health;

pub use greeting::root;
pub use health::health_check;
