//! Static landing page sections.

mod features;
mod hero;
mod pricing;

pub use features::Features;
pub use hero::Hero;
pub use pricing::Pricing;
