//! Text wrapping for message bubbles.

/// Wrap message text to `width` cells, keeping explicit line breaks.
///
/// Blank lines survive, so paragraphs keep their spacing. Long words are
/// broken. A `width` of zero returns the text split on newlines only.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r').replace('\t', "    ");
        if width == 0 || paragraph.is_empty() {
            lines.push(paragraph);
            continue;
        }
        lines.extend(
            textwrap::wrap(&paragraph, width)
                .into_iter()
                .map(std::borrow::Cow::into_owned),
        );
    }

    lines
}
