//! Integration tests for the HTML renderer.

use std::thread;

use exampaper::render::{option_label, to_html, RenderOptions};
use exampaper::{DataTable, Document, Exam, Orientation, Question, Section};

fn single_question(question: Question) -> Document {
    Document::new(Exam::default()).with_section(Section::default().with_question(question))
}

fn render(doc: &Document) -> String {
    to_html(doc, &RenderOptions::default())
}

fn create_sample_document() -> Document {
    Document::new(
        Exam::new("Annual Examination")
            .with_subject("Science")
            .with_duration("3 Hours")
            .with_marks(100, 33)
            .with_class("IX"),
    )
    .with_section(
        Section::new("Section A")
            .with_subtitle("Multiple choice")
            .with_question(Question::mcq("Q-A1", ["w", "x"]))
            .with_question(Question::mcq("Q-A2", ["y", "z"]))
            .with_question(Question::regular("Q-A3")),
    )
    .with_section(
        Section::new("Section B")
            .with_question(Question::regular("Q-B1"))
            .with_question(Question::or("Q-B2", vec![Question::regular("Q-B2 alt")])),
    )
}

#[test]
fn test_mcq_layout() {
    let question = Question::mcq(
        "Testing MCQ",
        ["Option A", "Option B", "Option C", "Option D"],
    );
    let doc = Document::new(Exam::new("Test Exam"))
        .with_section(Section::new("Section A").with_question(question));

    let html = render(&doc);

    assert!(html.contains("class=\"mcq-table\""));
    assert!(html.contains(".mcq-table { width: 95%; border: none;"));
    assert!(html.contains(
        "<tr><td width=\"50%\">(a) Option A</td><td width=\"50%\">(b) Option B</td></tr>"
    ));
    assert!(html.contains(
        "<tr><td width=\"50%\">(c) Option C</td><td width=\"50%\">(d) Option D</td></tr>"
    ));
}

#[test]
fn test_image_follows_text() {
    let doc = single_question(Question::regular("Image Question").with_diagram("/tmp/test.png"));
    let html = render(&doc);

    assert!(html.contains("src=\"file:///tmp/test.png\""));
    let img_pos = html.find("class=\"question-image\"").unwrap();
    let text_pos = html.find("Image Question").unwrap();
    assert!(img_pos > text_pos);
}

#[test]
fn test_empty_diagram_path_renders_no_image() {
    let json = r#"{
        "version": 1,
        "exam": { "title": "T" },
        "sections": [{ "label": "A", "questions": [
            { "type": "regular", "text": "No figure", "diagram_path": "" }
        ] }]
    }"#;
    let doc = exampaper::project::from_json(json).unwrap();
    let result = exampaper::render::to_html_with_stats(&doc, &RenderOptions::default());

    assert!(!result.content.contains("<img"));
    assert!(!result.content.contains("file://"));
    assert!(result
        .content
        .contains("<td class=\"question-text-cell\">No figure</td>"));
    assert_eq!(result.stats.diagram_count, 0);
}

#[test]
fn test_data_table_header_cells() {
    let table = DataTable::from_rows([["Col 1", "Col 2"]]);
    let doc = single_question(Question::regular("Table Question").with_table(table));
    let html = render(&doc);

    assert!(html.contains("<table class=\"data-table\"><tr><th>Col 1</th><th>Col 2</th></tr></table>"));
}

#[test]
fn test_table_follows_diagram() {
    let question = Question::regular("Both")
        .with_diagram("/tmp/d.png")
        .with_table(DataTable::from_rows([["h"], ["b"]]));
    let html = render(&single_question(question));

    let text_pos = html.find("Both").unwrap();
    let img_pos = html.find("class=\"question-image\"").unwrap();
    let table_pos = html.find("<table class=\"data-table\">").unwrap();
    assert!(text_pos < img_pos && img_pos < table_pos);
    assert!(html.contains("<tr><th>h</th></tr><tr><td>b</td></tr>"));
}

#[test]
fn test_or_layout() {
    let question = Question::or("Main Question", vec![Question::regular("Alternative Question")]);
    let html = render(&single_question(question));

    let main_pos = html.find("Main Question").unwrap();
    let or_pos = html.find(">OR</div>").unwrap();
    let alt_pos = html.find("<div class=\"or-question\">Alternative Question</div>").unwrap();
    assert!(main_pos < or_pos && or_pos < alt_pos);
}

#[test]
fn test_or_alternatives_in_order_and_escaped() {
    let question = Question::or(
        "Main",
        vec![
            Question::regular("first <alt>"),
            Question::regular("second & last"),
        ],
    );
    let html = render(&single_question(question));

    let first = html.find("first &lt;alt&gt;").unwrap();
    let second = html.find("second &amp; last").unwrap();
    assert!(first < second);
    assert_eq!(html.matches(">OR</div>").count(), 1);
}

#[test]
fn test_empty_document() {
    let doc = Document::new(Exam::new("Only A Title"));
    let html = render(&doc);

    assert!(html.starts_with("<html><head><meta charset=\"utf-8\"><style>"));
    assert!(html.contains("<h1>Only A Title</h1>"));
    assert!(!html.contains("<div class=\"section\">"));
    assert!(html.ends_with("</body></html>"));
}

#[test]
fn test_empty_title_has_no_heading() {
    let html = render(&Document::default());
    assert!(!html.contains("<h1>"));
    assert!(html.contains("<div class=\"metadata\"></div>"));
}

#[test]
fn test_metadata_line() {
    let html = render(&create_sample_document());
    assert!(html.contains(
        "<div class=\"metadata\">Science | 3 Hours | Total Marks: 100 | Pass Marks: 33 | Class: IX</div>"
    ));
}

#[test]
fn test_numbering_restarts_per_section() {
    let html = render(&create_sample_document());

    let section_b = html.find("<h2>Section B</h2>").unwrap();
    let (first, second) = html.split_at(section_b);

    assert!(first.contains("question-num-cell\">1)</td><td class=\"question-text-cell\">Q-A1"));
    assert!(first.contains("question-num-cell\">3)</td><td class=\"question-text-cell\">Q-A3"));
    assert!(second.contains("question-num-cell\">1)</td><td class=\"question-text-cell\">Q-B1"));
    assert!(second.contains("question-num-cell\">2)</td><td class=\"question-text-cell\">Q-B2"));
    assert!(!second.contains("question-num-cell\">3)"));
}

#[test]
fn test_section_label_and_subtitle() {
    let html = render(&create_sample_document());
    assert!(html.contains(
        "<div class=\"section\"><h2>Section A</h2><div class=\"subtitle\">Multiple choice</div>"
    ));
    assert!(html.contains("<div class=\"section\"><h2>Section B</h2><div class=\"question\">"));
}

#[test]
fn test_empty_section_and_question_still_render() {
    let doc = Document::new(Exam::default())
        .with_section(Section::default())
        .with_section(Section::default().with_question(Question::regular("")));
    let html = render(&doc);

    assert_eq!(html.matches("<div class=\"section\">").count(), 2);
    assert!(html.contains("<td class=\"question-num-cell\">1)</td><td class=\"question-text-cell\"></td>"));
}

#[test]
fn test_free_text_fields_are_escaped() {
    let table = DataTable::from_rows([["<th>", "\"q\""], ["a&b", "c>d"]]);
    let doc = Document::new(
        Exam::new("<Title>")
            .with_subject("S<1>")
            .with_duration("\"2h\"")
            .with_class("A&B"),
    )
    .with_section(
        Section::new("L<1>")
            .with_subtitle("Sub & title")
            .with_question(Question::mcq("<b>Raw</b>", ["x<y"]).with_table(table))
            .with_question(Question::mixed("m", ["p&q"])),
    );
    let html = render(&doc);

    assert!(html.contains("<h1>&lt;Title&gt;</h1>"));
    assert!(html.contains("S&lt;1&gt; | &quot;2h&quot; | Class: A&amp;B"));
    assert!(html.contains("<h2>L&lt;1&gt;</h2>"));
    assert!(html.contains("<div class=\"subtitle\">Sub &amp; title</div>"));
    assert!(html.contains("(a) x&lt;y</td><td></td>"));
    assert!(html.contains("<th>&lt;th&gt;</th><th>&quot;q&quot;</th>"));
    assert!(html.contains("<td>a&amp;b</td><td>c&gt;d</td>"));
    assert!(html.contains("(a) p&amp;q<br/>"));
    // Primary question text is trusted markup
    assert!(html.contains("<td class=\"question-text-cell\"><b>Raw</b>"));
}

#[test]
fn test_mcq_answer_is_not_rendered() {
    let html = render(&single_question(
        Question::mcq("Q", ["right", "wrong"]).with_answer(0),
    ));
    assert!(!html.contains("answer"));
}

#[test]
fn test_variant_payload_ignored_for_regular() {
    let html = render(&single_question(Question::regular("Plain").with_option("nope")));
    assert!(!html.contains("nope"));
    assert!(!html.contains("class=\"mcq-table\""));
}

#[test]
fn test_mcq_letters_beyond_z() {
    let options: Vec<String> = (0..28).map(|i| format!("opt{i}")).collect();
    let html = render(&single_question(Question::mcq("Many", options)));

    assert!(html.contains("(z) opt25</td>"));
    assert!(html.contains("<tr><td width=\"50%\">(aa) opt26</td><td width=\"50%\">(ab) opt27</td></tr>"));
    assert_eq!(option_label(26), "aa");
}

#[test]
fn test_options_affect_preamble_only() {
    let doc = create_sample_document();
    let portrait = to_html(&doc, &RenderOptions::default());
    let landscape = to_html(
        &doc,
        &RenderOptions::new()
            .with_font_family("Courier")
            .with_font_size(9)
            .with_orientation(Orientation::Landscape),
    );

    assert!(portrait.contains("size: A4 portrait;"));
    assert!(landscape.contains("size: A4 landscape;"));
    assert!(landscape.contains("font-family:'Courier', serif; font-size:9pt;"));

    let body = |html: &str| html[html.find("<body>").unwrap()..].to_string();
    assert_eq!(body(&portrait), body(&landscape));
}

#[test]
fn test_render_is_deterministic() {
    let doc = create_sample_document();
    let options = RenderOptions::default();
    assert_eq!(to_html(&doc, &options), to_html(&doc, &options));
    assert_eq!(to_html(&doc, &options), to_html(&doc.clone(), &options.clone()));
}

#[test]
fn test_render_concurrently_on_shared_document() {
    let doc = create_sample_document();
    let expected = render(&doc);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| render(&doc))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
