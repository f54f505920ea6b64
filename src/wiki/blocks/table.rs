//! `table` directive
//!
//! The first row is the header row; header cells are escaped only. Body cells are
//! escaped and then inline-parsed, so `&` and `<` in cell text stay text while link
//! syntax still works. Rows may have any number of cells.

use crate::wiki::ast::Params;
use crate::wiki::context::RenderContext;
use crate::wiki::html::escape;
use crate::wiki::inlines::parse_inline;

pub fn render_table(ctx: &RenderContext, params: &Params) -> String {
    let Some((header, body)) = params.rows().split_first() else {
        return String::new();
    };

    let mut out = String::from("<div class=\"wiki-table\">");
    if let Some(name) = params.get("name") {
        out.push_str(&format!("<h4>{}</h4>", escape(name)));
    }
    out.push_str("<table><thead><tr>");
    for cell in header {
        out.push_str(&format!("<th>{}</th>", escape(cell)));
    }
    out.push_str("</tr></thead><tbody>");
    for row in body {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", parse_inline(ctx, &escape(cell))));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
    out
}
