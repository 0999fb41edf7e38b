pub use self::page::{render_page, render_section, PageOptions};

mod card;
mod page;
