//! Parameter documentation and usage synopsis.

use super::escape::escape_html;
use crate::tree::Parameter;

/// Usage entries in declaration order: `--name type` for required
/// parameters, `[--name type]` for optional ones.
pub fn usage_entries(parameters: &[Parameter]) -> Vec<String> {
    parameters
        .iter()
        .map(|p| {
            let flag = format!("--{} {}", p.name, p.type_name);
            if p.required {
                flag
            } else {
                format!("[{}]", flag)
            }
        })
        .collect()
}

/// The usage block: the command line, then one indented entry per parameter.
pub(crate) fn render_usage(command_line: &[&str], parameters: &[Parameter]) -> String {
    let mut out = String::from("<div class=\"usage\">\n");
    out.push_str(&format!("  {}<br/>\n", escape_html(&command_line.join(" "))));
    for entry in usage_entries(parameters) {
        out.push_str(&format!("  &nbsp;&nbsp;{}<br/>\n", escape_html(&entry)));
    }
    out.push_str("</div>\n");
    out
}

/// The `<ul class="parameters">` list documenting each parameter.
pub fn render_parameters(parameters: &[Parameter]) -> String {
    let mut out = String::from("<ul class=\"parameters\">\n");
    for parameter in parameters {
        out.push_str(&render_parameter(parameter));
    }
    out.push_str("</ul>\n");
    out
}

fn render_parameter(p: &Parameter) -> String {
    let mut out = String::from("<li class=\"parameter\">\n");
    out.push_str(&format!(
        "  <span class=\"parameter-name\">--{} {}</span>\n",
        escape_html(&p.name),
        escape_html(&p.type_name)
    ));
    out.push_str(&format!(
        "  <span class=\"parameter-required\">{}</span>\n",
        if p.required { "(required)" } else { "" }
    ));
    out.push_str(&format!(
        "  <p class=\"parameter-description\">{}</p>\n",
        escape_html(&p.description)
    ));

    out.push_str("  <div class=\"parameter-default-value\">");
    if let Some(default) = p.default_display() {
        out.push_str(&format!("<span>Default Value: {}</span>", escape_html(&default)));
    }
    out.push_str("</div>\n");

    out.push_str("  <div class=\"parameter-allowed-values\">");
    let allowed = p.allowed_display();
    if !allowed.is_empty() {
        out.push_str("<span>Allowed Values:</span><ul>");
        for value in &allowed {
            out.push_str(&format!("<li>{}</li>", escape_html(value)));
        }
        out.push_str("</ul>");
    }
    out.push_str("</div>\n");

    out.push_str("  <div class=\"parameter-example\">");
    if let Some(example) = p.example_display() {
        out.push_str(&format!(
            "<span>Example:</span><br/><p class=\"parameter-example-code\">{}</p>",
            escape_html(example)
        ));
    }
    out.push_str("</div>\n");

    out.push_str("</li>\n");
    out
}
