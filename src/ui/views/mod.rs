//! Application views (screens).

mod page;

pub use page::{render_transition, PageView};
