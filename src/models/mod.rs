pub mod article;
pub mod config;
pub mod transcript;

pub use article::*;
pub use config::*;
pub use transcript::*;
