//! Code spans: a backtick run closed by the next run of the same length.

/// Length of the backtick run at the start of `text`.
pub(crate) fn backtick_run(text: &str) -> usize {
    text.bytes().take_while(|&b| b == b'`').count()
}

/// Try to parse a code span at the start of `text`.
/// Returns (total_len, content) or None when no closing run matches.
pub(crate) fn try_parse_code_span(text: &str) -> Option<(usize, String)> {
    let opening = backtick_run(text);
    if opening == 0 {
        return None;
    }

    let mut pos = opening;
    while let Some(offset) = text[pos..].find('`') {
        let run_start = pos + offset;
        let run = backtick_run(&text[run_start..]);
        if run == opening {
            let content = normalize_content(&text[opening..run_start]);
            return Some((run_start + run, content));
        }
        pos = run_start + run;
    }
    None
}

/// Whitespace runs become a single space, then one space is stripped from
/// both ends when both are present and the content is not all spaces.
fn normalize_content(raw: &str) -> String {
    let mut content = String::with_capacity(raw.len());
    let mut in_space = false;
    for ch in raw.chars() {
        if matches!(ch, ' ' | '\t' | '\n') {
            if !in_space {
                content.push(' ');
            }
            in_space = true;
        } else {
            content.push(ch);
            in_space = false;
        }
    }

    if content.len() >= 2
        && content.starts_with(' ')
        && content.ends_with(' ')
        && content.bytes().any(|b| b != b' ')
    {
        content = content[1..content.len() - 1].to_string();
    }
    content
}
