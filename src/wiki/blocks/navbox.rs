//! `navbox` directive
//!
//! Parameters:
//!
//!     name            box title (default from config, `Navigation`)
//!     color, color2   title and group-title backgrounds
//!     g1..g10         group titles, emitted as written
//!     l1..l10         group lists, inline-parsed
//!     gN.1, gN.2      sub-group titles inside group N, with lists lN.1, lN.2
//!
//! Groups without a title are skipped.

use crate::wiki::ast::Params;
use crate::wiki::context::RenderContext;
use crate::wiki::inlines::parse_inline;

const MAX_GROUPS: usize = 10;
const MAX_SUBGROUPS: usize = 2;

pub fn render_navbox(ctx: &RenderContext, params: &Params) -> String {
    let defaults = &ctx.config().navbox;
    let title = params.get("name").unwrap_or(&defaults.default_title);
    let title_color = params.get("color").unwrap_or(&defaults.title_color);
    let group_color = params.get("color2").unwrap_or(&defaults.group_color);

    let mut out = format!(
        "<div class=\"navbox\"><div class=\"navbox-title\" style=\"background:{}\"><span>{}</span></div>",
        title_color, title
    );

    for group in 1..=MAX_GROUPS {
        let Some(group_title) = params.get(&format!("g{}", group)) else {
            continue;
        };
        let list = params.get(&format!("l{}", group)).unwrap_or("");
        out.push_str(&format!(
            "<div class=\"navbox-group\"><div class=\"navbox-group-title\" style=\"background:{}\">{}</div><div class=\"navbox-content\">{}",
            group_color,
            group_title,
            parse_inline(ctx, list)
        ));

        for sub in 1..=MAX_SUBGROUPS {
            let Some(sub_title) = params.get(&format!("g{}.{}", group, sub)) else {
                continue;
            };
            let sub_list = params.get(&format!("l{}.{}", group, sub)).unwrap_or("");
            out.push_str(&format!(
                "<div class=\"navbox-subgroup\"><div class=\"navbox-subgroup-title\">{}</div><div class=\"navbox-subgroup-content\">{}</div></div>",
                sub_title,
                parse_inline(ctx, sub_list)
            ));
        }
        out.push_str("</div></div>");
    }

    out.push_str("</div>");
    out
}
