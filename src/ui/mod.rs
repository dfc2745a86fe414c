pub mod figure;
pub mod layout;
pub mod node;
pub mod render;

pub use layout::build_layout;
pub use node::{DropdownOption, EventKind, Node};
pub use render::render_page;
