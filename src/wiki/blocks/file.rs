//! `file` directive: `[file name=<file>]` links an uploaded file

use crate::wiki::ast::Params;
use crate::wiki::context::RenderContext;

pub fn render_file(ctx: &RenderContext, params: &Params) -> String {
    match params.get("name") {
        Some(name) => ctx.files().file_link(name),
        None => "[missing file parameter: name]".to_string(),
    }
}
