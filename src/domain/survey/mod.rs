//! Survey domain module.
//!
//! Covers the path from a free-text prompt to a persisted survey:
//! prompt templates, the plain-text question parser, theming, and the
//! survey aggregate itself. The parser is the heart of the module; the
//! oracle's output is never trusted to be well formed.

mod errors;
mod parser;
mod question;
mod survey;
mod template;
mod theme;

pub use errors::{ParseError, SurveyError};
pub use parser::parse_questions;
pub use question::{Question, QuestionKind};
pub use survey::{Survey, SurveyLinks};
pub use template::TemplateType;
pub use theme::{HexColor, Theme, ThemeColors};
