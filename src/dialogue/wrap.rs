//! Greedy word wrapping for the dialogue box

/// Wrap `text` into lines of at most `width` characters.
///
/// Words are separated by any whitespace, which collapses to a single space.
/// Words longer than `width` are split across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        loop {
            let sep = usize::from(line_len > 0);
            if line_len + sep + word.len() <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.extend(word.iter());
                line_len += sep + word.len();
                break;
            }

            if word.len() > width {
                // Fill what is left of the current line with the head of the word
                let room = width.saturating_sub(line_len + sep);
                if room == 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                    continue;
                }
                if sep == 1 {
                    line.push(' ');
                }
                line.extend(word.drain(..room));
                lines.push(std::mem::take(&mut line));
                line_len = 0;
                continue;
            }

            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}
