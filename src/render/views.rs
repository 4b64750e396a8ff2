//! One renderer per navigation depth.

use super::escape::{escape_attr, escape_html};
use super::guide::render_guide;
use super::parameters::{render_parameters, render_usage};
use crate::navigator::{resolve, View};
use crate::tree::CommandNode;

/// `<a href="#/a/b">text</a>` for the given path segments.
fn link(segments: &[&str], text: &str) -> String {
    format!(
        "<a href=\"#/{}\">{}</a>",
        escape_attr(&segments.join("/")),
        escape_html(text)
    )
}

/// Breadcrumb over `ancestors` (linked) and `current` (plain text).
fn breadcrumb(ancestors: &[&str], current: &str) -> String {
    let mut out = String::from("<nav class=\"breadcrumb\">\n<ol>\n");
    for (i, name) in ancestors.iter().enumerate() {
        // The executable links to the empty path; it is not a segment.
        let segments = if i == 0 {
            &ancestors[..0]
        } else {
            &ancestors[1..=i]
        };
        out.push_str(&format!("  <li>{}</li>\n", link(segments, name)));
    }
    out.push_str(&format!("  <li>{}</li>\n", escape_html(current)));
    out.push_str("</ol>\n</nav>\n");
    out
}

fn title_and_description(title_parts: &[&str], description: &str) -> String {
    format!(
        "<h1>{}</h1>\n<h2>Description</h2>\n<div class=\"description\">{}</div>\n",
        escape_html(&title_parts.join(" ")),
        escape_html(description)
    )
}

/// Listing of `node`'s subcommands, each linked under `prefix`.
fn subcommand_list(class: &str, prefix: &[&str], node: &CommandNode) -> String {
    let mut out = format!("<ul class=\"{}\">\n", class);
    for sub in &node.subcommands {
        let mut segments = prefix.to_vec();
        segments.push(sub.name.as_str());
        out.push_str(&format!("  <li>{}</li>\n", link(&segments, &sub.name)));
    }
    out.push_str("</ul>\n");
    out
}

/// Root view: services, configuration guide, and global parameters.
pub fn render_root(root: &CommandNode) -> String {
    let mut out = title_and_description(&[root.name.as_str()], &root.description);
    out.push_str("<h2>Available Services</h2>\n");
    out.push_str(&subcommand_list("services", &[], root));
    out.push_str(&render_guide(&root.name));
    out.push_str("<h2>Global Parameters</h2>\n");
    out.push_str(&render_parameters(&root.parameters));
    out
}

pub fn render_service(executable: &str, service: &CommandNode) -> String {
    let mut out = breadcrumb(&[executable], &service.name);
    out.push_str(&title_and_description(
        &[executable, service.name.as_str()],
        &service.description,
    ));
    out.push_str("<h2>Available Commands</h2>\n");
    out.push_str(&subcommand_list("commands", &[service.name.as_str()], service));
    out
}

pub fn render_category(executable: &str, service_name: &str, category: &CommandNode) -> String {
    let mut out = breadcrumb(&[executable, service_name], &category.name);
    out.push_str(&title_and_description(
        &[executable, service_name, category.name.as_str()],
        &category.description,
    ));
    out.push_str("<h2>Available Commands</h2>\n");
    out.push_str(&subcommand_list(
        "commands",
        &[service_name, category.name.as_str()],
        category,
    ));
    out
}

/// Operation view: usage synopsis and full parameter documentation.
pub fn render_operation(
    executable: &str,
    service_name: &str,
    category_name: &str,
    operation: &CommandNode,
) -> String {
    let command_line = [executable, service_name, category_name, operation.name.as_str()];
    let mut out = breadcrumb(&[executable, service_name, category_name], &operation.name);
    out.push_str(&title_and_description(&command_line, &operation.description));
    out.push_str("<h2>Usage</h2>\n");
    out.push_str(&render_usage(&command_line, &operation.parameters));
    out.push_str("<h2>Parameters</h2>\n");
    out.push_str(&render_parameters(&operation.parameters));
    out
}

/// Render whichever view the navigator selected.
pub fn render_view(view: &View<'_>) -> String {
    match *view {
        View::Root(root) => render_root(root),
        View::Service {
            executable,
            service,
        } => render_service(executable, service),
        View::Category {
            executable,
            service_name,
            category,
        } => render_category(executable, service_name, category),
        View::Operation {
            executable,
            service_name,
            category_name,
            operation,
        } => render_operation(executable, service_name, category_name, operation),
    }
}

/// Resolve `path` and render the deepest resolved view.
pub fn render_path(root: &CommandNode, path: &str) -> String {
    render_view(&resolve(root, path).view())
}

/// Visible error state for a command tree that could not be loaded.
pub fn render_error(message: &str) -> String {
    format!(
        "<h1>Documentation unavailable</h1>\n<div class=\"error\">{}</div>\n",
        escape_html(message)
    )
}
