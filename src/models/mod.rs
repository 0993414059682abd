mod answer;
mod question;

pub use answer::{option_label, Answer, AnswerKind, NUM_OPTIONS, OPTION_LABELS};
pub use question::Question;
