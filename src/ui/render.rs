//! HTML rendering of the dashboard tree.
//!
//! The page is rendered once; afterwards the embedded client script posts
//! dropdown changes to [`UPDATE_PATH`] and writes the answer into the
//! targeted output element only.

use super::node::{EventKind, Node, Style};

/// Endpoint the client posts component events to.
pub const UPDATE_PATH: &str = "/_dash-update-component";

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const CLIENT_JS: &str = include_str!("client.js");

/// Complete HTML document for `root`.
pub fn render_page(root: &Node, title: &str) -> String {
    let mut body = String::new();
    render_node(root, &mut body);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{plotly}" charset="utf-8"></script>
</head>
<body data-update-url="{update}">
{body}
<script>{js}</script>
</body>
</html>"#,
        title = escape_html(title),
        plotly = PLOTLY_CDN,
        update = escape_attr(UPDATE_PATH),
        body = body,
        js = CLIENT_JS,
    )
}

/// Append the HTML for `node` to `out`.
pub fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Div {
            id,
            style,
            children,
        } => {
            out.push_str("<div");
            if let Some(id) = id {
                out.push_str(&format!(r#" id="{}""#, escape_attr(id)));
            }
            push_style(style, out);
            out.push('>');
            for child in children {
                render_node(child, out);
            }
            out.push_str("</div>");
        }
        Node::Heading { level, text, style } => {
            let level = (*level).clamp(1, 6);
            out.push_str(&format!("<h{}", level));
            push_style(style, out);
            out.push_str(&format!(">{}</h{}>", escape_html(text), level));
        }
        Node::Graph { id, figure } => {
            let id = escape_attr(id);
            out.push_str(&format!(
                r#"<div id="{id}" class="graph"></div><script type="application/json" data-figure-for="{id}">{json}</script>"#,
                id = id,
                json = script_json(&figure.to_string()),
            ));
        }
        Node::Dropdown {
            id,
            options,
            placeholder,
        } => {
            out.push_str(&format!(
                r#"<select id="{}" data-event="{}"><option value="" data-value="null" selected>{}</option>"#,
                escape_attr(id),
                EventKind::Change,
                escape_html(placeholder),
            ));
            for opt in options {
                out.push_str(&format!(
                    r#"<option value="{label}" data-value="{value}">{text}</option>"#,
                    label = escape_attr(&opt.label),
                    value = escape_attr(&opt.value.to_string()),
                    text = escape_html(&opt.label),
                ));
            }
            out.push_str("</select>");
        }
        Node::Break => out.push_str("<br>"),
    }
}

fn push_style(style: &Style, out: &mut String) {
    if style.is_empty() {
        return;
    }
    let css: Vec<String> = style.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
    out.push_str(&format!(r#" style="{}""#, escape_attr(&css.join("; "))));
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    escape_html(s).replace('"', "&quot;").replace('\'', "&#39;")
}

/// JSON is embedded raw inside `<script>`; only `</` can end the element early.
fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
