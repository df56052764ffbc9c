//! Call names that carry text
//!
//! tgif stores the text of a `text(...)` object as nested calls:
//!
//! ```text
//! text('black',160,96,...,[
//! minilines(63,17,0,0,0,0,0,[
//! mini_line(63,13,4,0,0,0,[
//! str_block(0,63,13,4,0,0,0,0,0,[
//! str_seg('black','Courier',0,80640,63,13,4,0,0,0,0,0,0,0,
//!     "hello")])
//! ])
//! ])]).
//! ```
//!
//! Only these five names are looked at. Anything else is skipped without complaint.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// How a recognized call contributes to extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallForm {
    /// `text`: everything below is joined into a single string
    Paragraph,
    /// `minilines`: container of lines
    Lines,
    /// `mini_line`: a single line
    Line,
    /// `str_block`: a block of segments
    Block,
    /// `str_seg`: the last argument is the text
    Segment,
}

static VOCABULARY: Lazy<HashMap<&'static str, CallForm>> = Lazy::new(|| {
    HashMap::from([
        ("text", CallForm::Paragraph),
        ("minilines", CallForm::Lines),
        ("mini_line", CallForm::Line),
        ("str_block", CallForm::Block),
        ("str_seg", CallForm::Segment),
    ])
});

/// Look up the form of a callee name
pub fn call_form(name: &str) -> Option<CallForm> {
    VOCABULARY.get(name).copied()
}
