use crate::classify::classify;
use crate::inline;
use crate::line::{EngineState, LineKind};

/// Convert a full Markdown document to Micron markup.
///
/// The document is split on `\n`, each line is folded through [`step`]
/// carrying the engine state forward, and the outputs are joined back in
/// order. Exactly one output line is produced per input line, so the output
/// line count always equals the input line count.
pub fn render(markdown: &str) -> String {
    let mut state = EngineState::default();
    let mut lines = Vec::new();
    for line in markdown.split('\n') {
        let (next, rendered) = step(state, line);
        state = next;
        lines.push(rendered);
    }
    lines.join("\n")
}

/// Process one line: classify it, emit its Micron form, and return the
/// state to carry into the next line.
///
/// This is the only place [`EngineState`] is read or written.
pub fn step(state: EngineState, line: &str) -> (EngineState, String) {
    let mut next = state;
    let rendered = match classify(line, state.in_code_block) {
        LineKind::Blank => {
            next.in_list = false;
            String::new()
        }
        LineKind::FenceMarker => {
            next.in_code_block = !state.in_code_block;
            if next.in_code_block { "`=" } else { "``" }.to_string()
        }
        LineKind::Heading { level, text } => {
            // Heading text is wrapped as a single bold unit, never run
            // through the inline rewriter.
            format!("{} `!{}`!", ">".repeat(level as usize), text)
        }
        LineKind::ListItem { indent, text } => {
            if !state.in_list || indent != state.list_indent {
                next.list_indent = indent;
            }
            next.in_list = true;
            format!("{}* {}", "  ".repeat(indent / 2), text)
        }
        LineKind::HorizontalRule => "-".to_string(),
        LineKind::Plain(text) => inline::rewrite(text),
        LineKind::Verbatim(text) => text.to_string(),
    };
    (next, rendered)
}

/// Cache-lifetime control line understood by the terminal client.
///
/// Not part of the converted body; callers prefix it as a separate line.
pub fn cache_directive(seconds: u64) -> String {
    format!("#!c={seconds}")
}
