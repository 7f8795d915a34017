//! Command implementations for the carbon-proposal CLI

pub mod fields;
pub mod fill;
pub mod generate;
pub mod input;
pub mod show;
pub mod template;

pub use fields::*;
pub use fill::*;
pub use generate::*;
pub use show::*;
pub use template::*;
