//! Section blocks
//!
//! The Section is the block variant this crate ships: a standard page
//! section with an optional header and footer, background image with focal
//! point, and spacing options. Concrete blocks supply only the body markup.

pub mod schema;
pub mod section;

pub use schema::section_schema;
pub use section::{Section, SectionContent};
