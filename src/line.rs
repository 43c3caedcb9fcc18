/// Structural category of a single input line.
///
/// Variants are mutually exclusive. Classification tries them in a fixed
/// order and the first match wins, so a line never lands in more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// Line beginning with a triple-backtick sequence; toggles the fence,
    /// regardless of any trailing content such as a language tag.
    FenceMarker,
    /// `#`-prefixed heading, level 1 through 6.
    Heading { level: u8, text: &'a str },
    /// `*` or `-` bullet line; `indent` counts leading whitespace characters.
    ListItem { indent: usize, text: &'a str },
    /// Three or more `-`, `*`, or `_` characters and nothing else.
    HorizontalRule,
    /// Anything else; subject to inline span rewriting.
    Plain(&'a str),
    /// A line inside an open fence, emitted without any rewriting.
    Verbatim(&'a str),
}

/// Carried context for the fold over lines.
///
/// Created fresh per conversion, advanced one line at a time by the
/// dispatcher, and discarded once the document is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineState {
    /// Inside an open code fence; content passes through untouched.
    pub in_code_block: bool,
    /// A list item has been seen since the last blank line.
    pub in_list: bool,
    /// Indent width of the most recently seen list item.
    pub list_indent: usize,
}
