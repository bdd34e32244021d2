//! Document model types for exam papers.
//!
//! This module defines the tree handed to the renderer: a [`Document`] owns
//! its [`Exam`] metadata and an ordered list of [`Section`]s, each of which
//! owns its [`Question`]s. There are no back-references, so the whole tree is
//! a plain value that can be cloned, serialized and shared across threads.

mod document;
mod exam;
mod question;
mod section;
mod table;

pub use document::{AnswerKeyEntry, Document};
pub use exam::{Exam, Orientation};
pub use question::{Question, QuestionKind};
pub use section::Section;
pub use table::DataTable;
