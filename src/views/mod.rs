use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::align::{Cell, align_hunk, escape};
use crate::diff::{FileDiff, Hunk};

// Shared CSS constant
pub const CSS: &str = r#"
section {
  border: solid 1px #aaa;
  margin-bottom: 2em;
}
section h2 {
  font-weight: normal;
  font-size: 100%;
  background: #eee;
  margin: 0;
  padding: 0.5ex 1ex;
}
.hunk {
  border-spacing: 0;
  font-family: monospace;
  white-space: pre-wrap;
  line-height: 1.3em;
}
.hunk td {
  vertical-align: top;
  width: 50%;
}
.del {
  background: #fcc;
}
.add {
  background: #cfc;
}
"#;

/// Render the whole document: one section per file, one table per hunk.
/// Pure function of the parsed diff set, so repeated renders are
/// byte-identical.
pub fn diff_page(diffs: &[FileDiff]) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                title { "diff" }
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                style { (PreEscaped(CSS)) }
            }
            body {
                @for file in diffs {
                    (file_section(file))
                }
            }
        }
    }
}

fn file_section(file: &FileDiff) -> Markup {
    html! {
        section {
            h2 { (&file.orig_name) }
            @for (hi, hunk) in file.hunks.iter().enumerate() {
                @if hi > 0 { hr; }
                (hunk_table(hunk))
            }
        }
    }
}

fn hunk_table(hunk: &Hunk) -> Markup {
    let (left, right) = align_hunk(&hunk.body);
    html! {
        (PreEscaped(format!("<!-- {} -->", escape(&hunk.header))))
        table class="hunk" width="100%" {
            @for (l, r) in left.iter().zip(&right) {
                tr { (cell(l)) (cell(r)) }
            }
        }
    }
}

fn cell(cell: &Cell) -> Markup {
    // Cell text comes out of the aligner already escaped.
    match cell {
        Cell::Removed(text) => html! { td class="del" { "- " (PreEscaped(text)) } },
        Cell::Added(text) => html! { td class="add" { "+ " (PreEscaped(text)) } },
        Cell::Context(text) => html! { td { " " (PreEscaped(text)) } },
        Cell::Empty => html! { td {} },
    }
}
