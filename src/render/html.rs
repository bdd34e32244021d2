//! HTML rendering for exam papers.

use crate::model::{DataTable, Document, Exam, Question, QuestionKind, Section};

use super::style::{write_epilogue, write_preamble};
use super::{escape_html, option_label, PaperStats, RenderOptions, RenderResult};

/// Convert a paper to a self-contained HTML document.
///
/// Rendering is infallible and deterministic: equal inputs always produce
/// byte-identical output.
pub fn to_html(doc: &Document, options: &RenderOptions) -> String {
    HtmlRenderer::new(options.clone()).render(doc)
}

/// Convert a paper to HTML and report what was rendered.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> RenderResult {
    HtmlRenderer::new(options.clone()).render_with_stats(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: PaperStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: PaperStats::new(),
        }
    }

    /// Render a paper to HTML.
    pub fn render(mut self, doc: &Document) -> String {
        self.render_internal(doc)
    }

    /// Render a paper to HTML with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> RenderResult {
        let content = self.render_internal(doc);
        RenderResult::new(content, self.stats)
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        log::debug!(
            "Rendering paper {:?} ({} sections, {} questions)",
            doc.exam.title,
            doc.section_count(),
            doc.total_questions()
        );

        let mut output = String::with_capacity(4096);
        write_preamble(&mut output, &self.options);
        self.render_header(&mut output, &doc.exam);

        for section in &doc.sections {
            self.render_section(&mut output, section);
        }

        write_epilogue(&mut output);
        output
    }

    fn render_header(&self, output: &mut String, exam: &Exam) {
        if !exam.title.is_empty() {
            output.push_str("<h1>");
            output.push_str(&escape_html(&exam.title));
            output.push_str("</h1>");
        }

        output.push_str("<div class=\"metadata\">");
        output.push_str(&metadata_line(exam));
        output.push_str("</div>");

        output.push_str(
            "<hr style=\"border: 0; border-top: 2px solid #000; margin: 10px 0 20px 0;\" />",
        );
    }

    fn render_section(&mut self, output: &mut String, section: &Section) {
        self.stats.add_section();
        output.push_str("<div class=\"section\">");

        if !section.label.is_empty() {
            output.push_str("<h2>");
            output.push_str(&escape_html(&section.label));
            output.push_str("</h2>");
        }

        if !section.subtitle.is_empty() {
            output.push_str("<div class=\"subtitle\">");
            output.push_str(&escape_html(&section.subtitle));
            output.push_str("</div>");
        }

        // Numbering restarts in every section
        for (i, question) in section.questions.iter().enumerate() {
            self.render_question(output, question, i + 1);
        }

        output.push_str("</div>");
    }

    fn render_question(&mut self, output: &mut String, question: &Question, number: usize) {
        self.stats.add_question(&question.kind);
        output.push_str("<div class=\"question\">");

        // Diagram and data table float beside the text
        let mut floated = String::new();
        if let Some(path) = question.diagram() {
            self.stats.add_diagram();
            floated.push_str("<br/><img src=\"file://");
            floated.push_str(&path.to_string_lossy());
            floated.push_str(
                "\" width=\"150\" align=\"right\" class=\"question-image\" \
                 alt=\"Question diagram\" />",
            );
        }
        if !question.table.is_empty() {
            self.stats.add_table();
            render_data_table(&mut floated, &question.table);
        }

        output.push_str("<table class=\"question-layout\"><tr><td class=\"question-num-cell\">");
        output.push_str(&format!("{})", number));
        output.push_str("</td><td class=\"question-text-cell\">");
        output.push_str(&question.text);
        output.push_str(&floated);
        output.push_str("</td></tr></table>");

        match &question.kind {
            QuestionKind::Regular => {}
            QuestionKind::Or { alternatives } => render_alternatives(output, alternatives),
            QuestionKind::Mcq { options, .. } => render_mcq_options(output, options),
            QuestionKind::Mixed { options } => render_mixed_options(output, options),
        }

        output.push_str("</div>");
    }
}

/// Join the non-empty metadata parts with `" | "`.
fn metadata_line(exam: &Exam) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !exam.subject.is_empty() {
        parts.push(escape_html(&exam.subject).into_owned());
    }
    if !exam.duration.is_empty() {
        parts.push(escape_html(&exam.duration).into_owned());
    }
    if exam.total_marks > 0 {
        parts.push(format!("Total Marks: {}", exam.total_marks));
    }
    if exam.pass_marks > 0 {
        parts.push(format!("Pass Marks: {}", exam.pass_marks));
    }
    if !exam.class_name.is_empty() {
        parts.push(format!("Class: {}", escape_html(&exam.class_name)));
    }

    parts.join(" | ")
}

fn render_alternatives(output: &mut String, alternatives: &[Question]) {
    if alternatives.is_empty() {
        return;
    }

    output.push_str("<div style=\"text-align:center; font-weight:bold; margin: 5px 0;\">OR</div>");
    for alternative in alternatives {
        output.push_str("<div class=\"or-question\">");
        output.push_str(&escape_html(&alternative.text));
        output.push_str("</div>");
    }
}

/// Two options per row: `(0, 1)`, `(2, 3)`, ... An odd leftover gets an
/// empty sibling cell.
fn render_mcq_options(output: &mut String, options: &[String]) {
    if options.is_empty() {
        return;
    }

    output.push_str("<div style=\"clear:both;\"></div>");
    output.push_str("<table class=\"mcq-table\">");
    for (row, pair) in options.chunks(2).enumerate() {
        output.push_str("<tr>");
        for (col, option) in pair.iter().enumerate() {
            output.push_str(&format!(
                "<td width=\"50%\">({}) {}</td>",
                option_label(row * 2 + col),
                escape_html(option)
            ));
        }
        if pair.len() == 1 {
            output.push_str("<td></td>");
        }
        output.push_str("</tr>");
    }
    output.push_str("</table>");
}

fn render_mixed_options(output: &mut String, options: &[String]) {
    if options.is_empty() {
        return;
    }

    output.push_str("<div style=\"clear:both;\"></div>");
    output.push_str("<div class=\"mcq-options\">");
    for (i, option) in options.iter().enumerate() {
        output.push_str(&format!("({}) {}<br/>", option_label(i), escape_html(option)));
    }
    output.push_str("</div>");
}

/// Row 0 renders as header cells, every later row as body cells. An empty
/// table renders nothing.
fn render_data_table(output: &mut String, table: &DataTable) {
    if table.is_empty() {
        return;
    }

    output.push_str("<table class=\"data-table\">");
    for (i, row) in table.rows.iter().enumerate() {
        let tag = if i == 0 { "th" } else { "td" };
        output.push_str("<tr>");
        for cell in row {
            output.push_str(&format!("<{tag}>{}</{tag}>", escape_html(cell)));
        }
        output.push_str("</tr>");
    }
    output.push_str("</table>");
}
