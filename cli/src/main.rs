//! exampaper CLI - exam paper rendering and export tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use exampaper::export::{
    default_filename, ensure_extension, export_batch_with_progress, sanitize_filename,
    unique_paths, ExportJob,
};
use exampaper::project::PROJECT_EXTENSION;
use exampaper::{
    DataTable, Document, Exam, ExamPaper, ExportFormat, ExportOptions, ExporterRegistry,
    PaperStats, Question, Section,
};

#[derive(Parser)]
#[command(name = "exampaper")]
#[command(version)]
#[command(about = "Render and export exam papers as printable HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a project to HTML
    Render {
        /// Project file
        #[arg(value_name = "PROJECT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Export one or more projects to HTML or Word files
    Export {
        /// Project files
        #[arg(value_name = "PROJECT", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file, or directory when exporting several projects
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Output format (inferred from the output extension if omitted)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Export even if the paper is incomplete
        #[arg(long)]
        no_validate: bool,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Print a plain-text rendition
    Text {
        /// Project file
        #[arg(value_name = "PROJECT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show paper information
    Info {
        /// Project file
        #[arg(value_name = "PROJECT")]
        input: PathBuf,
    },

    /// Check that a paper is ready for export
    Validate {
        /// Project file
        #[arg(value_name = "PROJECT")]
        input: PathBuf,
    },

    /// Write a sample project file
    Init {
        /// Project file to create
        #[arg(value_name = "FILE")]
        output: PathBuf,

        /// Exam title
        #[arg(long, default_value = "Sample Examination")]
        title: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version information
    Version,
}

/// Page styling shared by the rendering commands.
#[derive(Args)]
struct StyleArgs {
    /// Font family
    #[arg(long, env = "EXAMPAPER_FONT", default_value = "Times New Roman")]
    font: String,

    /// Font size in points
    #[arg(long, env = "EXAMPAPER_FONT_SIZE", default_value = "12")]
    font_size: u32,

    /// Force landscape pages (default: the paper's own orientation)
    #[arg(long)]
    landscape: bool,
}

impl StyleArgs {
    fn builder(&self) -> ExamPaper {
        let builder = ExamPaper::new()
            .with_font_family(self.font.clone())
            .with_font_size(self.font_size);
        if self.landscape {
            builder.landscape()
        } else {
            builder
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Standalone HTML page
    Html,
    /// Word-processor document
    Word,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Html => ExportFormat::Html,
            FormatArg::Word => ExportFormat::Word,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            style,
        }) => cmd_render(&input, output.as_deref(), &style),
        Some(Commands::Export {
            inputs,
            output,
            format,
            no_validate,
            style,
        }) => cmd_export(
            &inputs,
            output.as_deref(),
            format.map(ExportFormat::from),
            !no_validate,
            &style,
        ),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Validate { input }) => cmd_validate(&input),
        Some(Commands::Init {
            output,
            title,
            force,
        }) => cmd_init(&output, &title, force),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: exampaper <COMMAND> <PROJECT>".yellow());
            println!("       exampaper --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let paper = style.builder().open(input)?;
    let html = paper.to_html();
    write_or_print(output, &html)
}

fn cmd_export(
    inputs: &[PathBuf],
    output: Option<&Path>,
    format: Option<ExportFormat>,
    validate: bool,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    match inputs {
        [input] => export_single(input, output, format, validate, style),
        _ => export_many(inputs, output, format, validate, style),
    }
}

fn export_single(
    input: &Path,
    output: Option<&Path>,
    format: Option<ExportFormat>,
    validate: bool,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let paper = style.builder().open(input)?;
    let options = ExportOptions::new()
        .with_render_options(paper.render_options().clone())
        .with_validation(validate);

    let timestamp = chrono::Local::now().naive_local();
    let suggested = |format: ExportFormat| {
        PathBuf::from(default_filename(&paper.document.exam.title, format, timestamp))
    };

    let destination = match output {
        Some(path) if path.is_dir() => path.join(suggested(format.unwrap_or_default())),
        Some(path) => match format {
            Some(format) => ensure_extension(path, format.extension()),
            None => path.to_path_buf(),
        },
        None => suggested(format.unwrap_or_default()),
    };

    let registry = ExporterRegistry::with_defaults();
    let result = match format {
        Some(format) => registry
            .get_by_format(format)
            .ok_or_else(|| format!("No exporter for {}", format.name()))?
            .export(&paper.document, &destination, &options)?,
        None => registry.export(&paper.document, &destination, &options)?,
    };

    println!(
        "{} {} ({}, {} bytes)",
        "Exported".green(),
        result.path.display(),
        result.format.name(),
        result.bytes_written
    );

    Ok(())
}

fn export_many(
    inputs: &[PathBuf],
    output: Option<&Path>,
    format: Option<ExportFormat>,
    validate: bool,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let format = format.unwrap_or_default();
    log::debug!(
        "Batch exporting {} projects into {}",
        inputs.len(),
        output_dir.display()
    );

    let mut papers = Vec::with_capacity(inputs.len());
    let mut destinations = Vec::with_capacity(inputs.len());
    for input in inputs {
        papers.push(style.builder().open(input)?);
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let name = format!("{}.{}", sanitize_filename(&stem), format.extension());
        destinations.push(output_dir.join(name));
    }

    // Same-named inputs from different directories get numbered outputs
    let jobs: Vec<ExportJob> = papers
        .into_iter()
        .zip(unique_paths(destinations))
        .map(|(paper, destination)| {
            let render_options = paper.render_options().clone();
            ExportJob::new(paper.document, destination).with_render_options(render_options)
        })
        .collect();

    let options = ExportOptions::new().with_validation(validate);

    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Exporting...");

    let results = export_batch_with_progress(
        &jobs,
        &ExporterRegistry::with_defaults(),
        &options,
        |index, result| {
            match result {
                Ok(exported) => pb.println(format!(
                    "  {} {}",
                    "├─".dimmed(),
                    exported.path.display()
                )),
                Err(e) => pb.println(format!(
                    "  {} {}: {}",
                    "├─".dimmed(),
                    jobs[index].output.display(),
                    e.to_string().red()
                )),
            }
            pb.inc(1);
        },
    );

    pb.finish_with_message("Done!");

    let mut totals = PaperStats::new();
    let mut failed = 0;
    for (job, result) in jobs.iter().zip(&results) {
        match result {
            Ok(_) => totals.merge(&PaperStats::from_document(&job.document)),
            Err(_) => failed += 1,
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} exports failed", failed, jobs.len()).into());
    }

    println!(
        "\n{} {} papers exported to {} ({} sections, {} questions)",
        "Done!".green().bold(),
        jobs.len(),
        output_dir.display(),
        totals.section_count,
        totals.question_count
    );

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = exampaper::load_project(input)?;
    let text = exampaper::render::to_text(&doc);
    write_or_print(output, &text)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = exampaper::load_project(input)?;
    let exam = &doc.exam;

    println!("{}", "Paper Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), exam.title);
    if !exam.subject.is_empty() {
        println!("{}: {}", "Subject".bold(), exam.subject);
    }
    if !exam.class_name.is_empty() {
        println!("{}: {}", "Class".bold(), exam.class_name);
    }
    if !exam.term.is_empty() {
        println!("{}: {}", "Term".bold(), exam.term);
    }
    if let Some(date) = exam.exam_date {
        println!("{}: {}", "Date".bold(), date);
    }
    if !exam.duration.is_empty() {
        println!("{}: {}", "Duration".bold(), exam.duration);
    }
    println!(
        "{}: {} / {}",
        "Marks (total / pass)".bold(),
        exam.total_marks,
        exam.pass_marks
    );
    println!("{}: {}", "Orientation".bold(), exam.orientation);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = PaperStats::from_document(&doc);
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Questions".bold(), stats.question_count);
    println!(
        "{}: {} regular, {} OR, {} MCQ, {} mixed",
        "By type".bold(),
        stats.regular_count,
        stats.or_count,
        stats.mcq_count,
        stats.mixed_count
    );
    println!("{}: {}", "Options".bold(), stats.option_count);
    println!("{}: {}", "Diagrams".bold(), stats.diagram_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);

    let key = doc.answer_key();
    if !key.is_empty() {
        println!();
        println!("{}", "Answer Key".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for entry in key {
            println!("{} {}) ({})", entry.section, entry.number, entry.label);
        }
    }

    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = exampaper::load_project(input)?;
    doc.validate()?;
    println!(
        "{} {} ({} sections, {} questions)",
        "Valid".green().bold(),
        input.display(),
        doc.section_count(),
        doc.total_questions()
    );
    Ok(())
}

fn cmd_init(output: &Path, title: &str, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = ensure_extension(output, PROJECT_EXTENSION);
    if path.exists() && !force {
        return Err(format!("{} already exists (use --force to overwrite)", path.display()).into());
    }

    exampaper::save_project(&sample_document(title), &path)?;
    println!("{} {}", "Created".green(), path.display());
    Ok(())
}

fn sample_document(title: &str) -> Document {
    let exam = Exam::new(title)
        .with_subject("General Science")
        .with_duration("1 Hour")
        .with_marks(20, 7)
        .with_class("VII");

    Document::new(exam)
        .with_section(
            Section::new("Section A")
                .with_subtitle("Choose the correct answer")
                .with_question(
                    Question::mcq(
                        "Which gas do plants absorb from the air?",
                        ["Oxygen", "Carbon dioxide", "Nitrogen", "Helium"],
                    )
                    .with_answer(1),
                )
                .with_question(Question::mixed(
                    "Fill in the blank: water boils at ___ degrees Celsius.",
                    ["90", "100", "110"],
                )),
        )
        .with_section(
            Section::new("Section B")
                .with_subtitle("Answer in brief")
                .with_question(
                    Question::regular("Study the table and name the densest material.")
                        .with_table(DataTable::from_rows([
                            ["Material", "Density (g/cm3)"],
                            ["Wood", "0.7"],
                            ["Iron", "7.9"],
                        ])),
                )
                .with_question(Question::or(
                    "Describe the water cycle.",
                    vec![Question::regular("Describe how clouds are formed.")],
                )),
        )
}

fn cmd_version() {
    println!("{} {}", "exampaper".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Exam paper rendering and export tool");
    println!();
    println!("License: MIT");
}
