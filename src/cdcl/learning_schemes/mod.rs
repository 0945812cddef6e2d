mod first_uip;
mod learning_scheme;

pub use first_uip::FirstUIP;
pub use learning_scheme::{LearningScheme, LearningSchemeFactory};
