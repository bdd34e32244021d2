//! Document preamble and embedded stylesheet.
//!
//! The class names declared here (`metadata`, `section`, `subtitle`,
//! `question`, `question-layout`, `question-num-cell`, `or-question`,
//! `mcq-table`, `mcq-options`, `data-table`, `question-image`) are a stable
//! contract with preview, print and export consumers. Do not rename them.

use std::fmt::Write;

use super::RenderOptions;

/// Width of the question number column in pixels.
pub const QUESTION_NUMBER_WIDTH: u32 = 30;

/// Left indent of "OR" alternatives in pixels.
pub const OR_INDENT: u32 = 20;

/// Rules that do not depend on render options.
const STATIC_RULES: &str = concat!(
    "p { margin:0; padding:0; }",
    "h1 { text-align:center; margin-bottom:6px; font-size:1.3em; font-weight:bold; }",
    "h2 { text-align:center; margin-top:12px; margin-bottom:3px; font-size:1.0em; font-weight:bold; }",
    ".metadata { text-align:center; margin-bottom:12px; font-size:0.8em; }",
    ".section { margin-top:12px; page-break-inside:avoid; }",
    ".subtitle { text-align:center; font-weight:bold; font-size:0.85em; margin-bottom:6px; font-style:italic; }",
    ".question { margin:2px 0; text-align:left; }",
    ".question-layout { width:100%; border-collapse:collapse; }",
    ".question-layout td { border:none; padding:0; vertical-align:top; }",
);

const TRAILING_RULES: &str = concat!(
    ".mcq-options { margin-left:15px; margin-top:1px; line-height:1.2; }",
    "table { border-collapse:collapse; width:100%; margin:3px 0; font-size:0.85em; }",
    "td, th { border:1px solid #000; padding:2px 4px; text-align:left; }",
    "th { background-color:#f5f5f5; font-weight:bold; }",
    "img { max-width:100%; height:auto; margin:2px 0; display:block; }",
    ".mcq-table { width: 95%; border: none; margin-left: 15px; margin-top: 5px; }",
    ".mcq-table td { border: none; padding: 2px 10px; vertical-align: top; }",
    ".data-table { float: right; width: auto; margin: 0 0 5px 15px; border: 1px solid #000; }",
    ".data-table td, .data-table th { border: 1px solid #000; }",
    ".question-image { margin: 5px; }",
);

/// Append the opening `<html>`, `<head>` with stylesheet, and `<body>` tags.
pub fn write_preamble(output: &mut String, options: &RenderOptions) {
    let family = &options.font_family;
    let size = options.font_size;

    output.push_str("<html><head><meta charset=\"utf-8\"><style>");
    let _ = write!(
        output,
        "@page {{ size: A4 {}; margin: 15mm; }}",
        options.orientation.as_css()
    );
    let _ = write!(
        output,
        "@media print {{ body {{ font-family:'{family}', serif; font-size:{size}pt; \
         margin:0; line-height:1.4; max-width:100%; }} }}"
    );
    let _ = write!(
        output,
        "body {{ font-family:'{family}', serif; font-size:{size}pt; margin:10px; \
         line-height:1.4; max-width:100%; box-sizing:border-box; }}"
    );
    output.push_str(STATIC_RULES);
    let _ = write!(
        output,
        ".question-num-cell {{ width:{QUESTION_NUMBER_WIDTH}px; font-weight:bold; }}"
    );
    let _ = write!(
        output,
        ".or-question {{ margin-left:{OR_INDENT}px; margin-top:2px; }}"
    );
    output.push_str(TRAILING_RULES);
    output.push_str("</style></head><body>");
}

/// Append the closing `</body></html>` tags.
pub fn write_epilogue(output: &mut String) {
    output.push_str("</body></html>");
}
