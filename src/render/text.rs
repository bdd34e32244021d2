//! Plain text rendering for terminal previews.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Document, Exam, Question, QuestionKind};

use super::option_label;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

/// Strip markup tags and collapse runs of whitespace.
fn strip_markup(text: &str) -> String {
    let stripped = tag_pattern().replace_all(text, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Convert a paper to plain text.
///
/// Question markup is stripped; nothing is escaped.
pub fn to_text(doc: &Document) -> String {
    let mut output = String::new();
    render_header(&mut output, &doc.exam);

    for section in &doc.sections {
        output.push('\n');
        if !section.label.is_empty() {
            output.push_str(&section.label);
            output.push('\n');
        }
        if !section.subtitle.is_empty() {
            output.push_str(&section.subtitle);
            output.push('\n');
        }
        for (i, question) in section.questions.iter().enumerate() {
            render_question(&mut output, question, i + 1);
        }
    }

    output.trim_end().to_string()
}

fn render_header(output: &mut String, exam: &Exam) {
    if !exam.title.is_empty() {
        output.push_str(&exam.title);
        output.push('\n');
    }

    let mut parts: Vec<String> = Vec::new();
    if !exam.subject.is_empty() {
        parts.push(exam.subject.clone());
    }
    if !exam.duration.is_empty() {
        parts.push(exam.duration.clone());
    }
    if exam.total_marks > 0 {
        parts.push(format!("Total Marks: {}", exam.total_marks));
    }
    if exam.pass_marks > 0 {
        parts.push(format!("Pass Marks: {}", exam.pass_marks));
    }
    if !exam.class_name.is_empty() {
        parts.push(format!("Class: {}", exam.class_name));
    }
    if !parts.is_empty() {
        output.push_str(&parts.join(" | "));
        output.push('\n');
    }

    output.push_str(&"=".repeat(40));
    output.push('\n');
}

fn render_question(output: &mut String, question: &Question, number: usize) {
    output.push_str(&format!("{}) {}\n", number, strip_markup(&question.text)));

    if let Some(path) = question.diagram() {
        output.push_str(&format!("   [diagram: {}]\n", path.display()));
    }
    for row in &question.table.rows {
        output.push_str(&format!("   | {} |\n", row.join(" | ")));
    }

    match &question.kind {
        QuestionKind::Regular => {}
        QuestionKind::Or { alternatives } => {
            for alternative in alternatives {
                output.push_str("   OR\n");
                output.push_str(&format!("   {}\n", alternative.text));
            }
        }
        QuestionKind::Mcq { options, .. } | QuestionKind::Mixed { options } => {
            for (i, option) in options.iter().enumerate() {
                output.push_str(&format!("   ({}) {}\n", option_label(i), option));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DataTable, Section};

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<p><b>Bold</b>  text</p>"), "Bold text");
        assert_eq!(strip_markup("no tags"), "no tags");
    }

    #[test]
    fn test_to_text() {
        let doc = Document::new(Exam::new("Quiz").with_subject("History").with_marks(20, 0))
            .with_section(
                Section::new("Part 1")
                    .with_subtitle("Answer all")
                    .with_question(Question::mcq("<i>Who?</i>", ["A & B", "C"]))
                    .with_question(
                        Question::or("First", vec![Question::regular("Second")])
                            .with_table(DataTable::from_rows([["x", "y"]])),
                    ),
            );

        let text = to_text(&doc);
        assert!(text.starts_with("Quiz\nHistory | Total Marks: 20\n"));
        assert!(text.contains("Part 1\nAnswer all\n"));
        assert!(text.contains("1) Who?\n   (a) A & B\n   (b) C\n"));
        assert!(text.contains("2) First\n   | x | y |\n   OR\n   Second"));
    }
}
