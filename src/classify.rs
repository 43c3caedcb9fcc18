use crate::line::LineKind;

/// Classify a raw line given the current fence state.
///
/// While inside a code fence only the fence-marker check applies; any other
/// line is passed through verbatim. Outside a fence the checks run in a
/// fixed order: blank, fence marker, heading, list item, horizontal rule,
/// then plain as the fallback.
pub fn classify(line: &str, in_code_block: bool) -> LineKind<'_> {
    if in_code_block {
        if is_fence_marker(line) {
            return LineKind::FenceMarker;
        }
        return LineKind::Verbatim(line);
    }
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if is_fence_marker(line) {
        return LineKind::FenceMarker;
    }
    if let Some((level, text)) = parse_heading(line) {
        return LineKind::Heading { level, text };
    }
    if let Some((indent, text)) = parse_list_item(line) {
        return LineKind::ListItem { indent, text };
    }
    if is_horizontal_rule(line) {
        return LineKind::HorizontalRule;
    }
    LineKind::Plain(line)
}

fn is_fence_marker(line: &str) -> bool {
    line.starts_with("```")
}

/// 1-6 leading `#`, at least one whitespace character, then non-blank text.
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    let text = rest.trim_start();
    if text.is_empty() || text.len() == rest.len() {
        return None;
    }
    Some((level as u8, text))
}

/// Leading whitespace, a `*` or `-` bullet, at least one whitespace
/// character, then non-blank text. The indent is counted in characters.
fn parse_list_item(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    let indent = line[..line.len() - trimmed.len()].chars().count();
    let rest = trimmed.strip_prefix(['*', '-'])?;
    let text = rest.trim_start();
    if text.is_empty() || text.len() == rest.len() {
        return None;
    }
    Some((indent, text))
}

fn is_horizontal_rule(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| matches!(b, b'-' | b'*' | b'_'))
}
