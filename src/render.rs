//! HTML rendering of command documentation views.
//!
//! Every function here is a pure function of its inputs. Source text is always
//! escaped before it reaches the output.

mod escape;
mod guide;
pub mod page;
mod parameters;
mod views;

pub use escape::{escape_attr, escape_html};
pub use parameters::{render_parameters, usage_entries};
pub use views::{
    render_category, render_error, render_operation, render_path, render_root, render_service,
    render_view,
};
