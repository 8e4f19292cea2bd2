//! Page-context excerpt attached to each question.

/// First `max_chars` characters of the page text, whitespace collapsed.
pub fn page_excerpt(page_text: &str, max_chars: usize) -> String {
    let mut out = String::new();
    let mut taken = 0;
    for word in page_text.split_whitespace() {
        let sep = usize::from(!out.is_empty());
        if taken + sep >= max_chars {
            break;
        }
        if sep == 1 {
            out.push(' ');
            taken += 1;
        }
        for ch in word.chars() {
            if taken == max_chars {
                return out;
            }
            out.push(ch);
            taken += 1;
        }
    }
    out
}

/// The final user turn: the question, preceded by page context when any.
pub fn compose_question(question: &str, excerpt: &str) -> String {
    if excerpt.is_empty() {
        return question.to_string();
    }
    format!("Context from the current page:\n\"\"\"\n{excerpt}\n\"\"\"\n\nQuestion: {question}")
}
