pub mod probe;
pub mod session;

pub use probe::{LivePage, PageProbe};
pub use session::{ValidationSession, urls_equivalent};
