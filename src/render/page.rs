//! Page shell for the static documentation site.
//!
//! Every view is pre-rendered into a `<template data-path>` element. The
//! inline script only picks the template for the longest prefix of the
//! fragment that has one, which is the same answer the navigator gives.

use super::escape::{escape_attr, escape_html};

const STYLE: &str = r#"body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;margin:0;color:#1f2328}
.main{max-width:960px;margin:0 auto;padding:24px}
.breadcrumb ol{list-style:none;padding:0;display:flex;gap:8px}
.breadcrumb li+li:before{content:'/';padding-right:8px;color:#8c959f}
.usage,code{font-family:ui-monospace,Menlo,monospace;background:#f6f8fa;padding:8px;display:block}
.parameters{list-style:none;padding:0}
.parameter{border-top:1px solid #d0d7de;padding:8px 0}
.parameter-name{font-family:ui-monospace,Menlo,monospace;font-weight:600}
.parameter-required{color:#cf222e}
.parameter-example-code{font-family:ui-monospace,Menlo,monospace}
.error{color:#cf222e}"#;

const SCRIPT: &str = r#"(function(){
  var main = document.querySelector('.main');
  function lookup(path){
    var t = document.querySelector('template[data-path="' + path.replace(/["\\]/g, '\\$&') + '"]');
    return t ? t.innerHTML : null;
  }
  function decode(segment){
    try { return decodeURIComponent(segment); } catch (e) { return segment; }
  }
  function show(){
    var segments = window.location.hash.split('/').slice(1, 4).map(decode);
    for (var n = segments.length; n > 0; n--) {
      var html = lookup('/' + segments.slice(0, n).join('/'));
      if (html !== null) { main.innerHTML = html; return; }
    }
    main.innerHTML = lookup('/') || '';
  }
  window.addEventListener('hashchange', show);
  show();
})();"#;

/// Assemble the full page from `(canonical path, fragment)` pairs.
pub fn render_page(title: &str, views: &[(String, String)]) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(&format!("<style>\n{}\n</style>\n", STYLE));
    out.push_str("</head>\n<body>\n<div class=\"main\"></div>\n");
    for (path, html) in views {
        out.push_str(&format!(
            "<template data-path=\"{}\">\n{}</template>\n",
            escape_attr(path),
            html
        ));
    }
    out.push_str(&format!("<script>\n{}\n</script>\n", SCRIPT));
    out.push_str("</body>\n</html>\n");
    out
}
