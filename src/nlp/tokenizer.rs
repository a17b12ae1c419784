//! Text normalization and segmentation.
//!
//! Two segmentation passes feed the rest of the crate. Sentence segmentation
//! splits at runs of terminal punctuation, keeps the terminators attached to
//! their sentence, and records each sentence's index and byte span. Word
//! segmentation lowercases and splits on whitespace; it performs no stemming
//! and keeps punctuation attached to words (downstream consumers decide how
//! much of that to strip).

use crate::types::Sentence;

/// Characters that end a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Trim surrounding whitespace and collapse internal runs to single spaces.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Split `text` into sentences.
///
/// A run of terminator characters ends one sentence and stays attached to
/// it. Whitespace-only segments are dropped; a trailing segment without a
/// terminator becomes the final sentence. Indices count kept sentences
/// only, and spans cover the trimmed sentence text.
pub fn segment_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if !SENTENCE_TERMINATORS.contains(&ch) {
            continue;
        }
        // Absorb the rest of the terminator run ("..." or "?!" ends one
        // sentence, not several).
        let mut end = pos + ch.len_utf8();
        while let Some(&(next_pos, next_ch)) = chars.peek() {
            if !SENTENCE_TERMINATORS.contains(&next_ch) {
                break;
            }
            end = next_pos + next_ch.len_utf8();
            chars.next();
        }
        push_sentence(&mut sentences, text, start, end);
        start = end;
    }
    push_sentence(&mut sentences, text, start, text.len());

    sentences
}

/// Lowercase, whitespace-delimited words of `text`.
pub fn segment_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

fn push_sentence(sentences: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    if start >= end {
        return;
    }
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = slice.len() - slice.trim_start().len();
    let trim_start = start + lead;
    sentences.push(Sentence {
        text: trimmed.to_string(),
        index: sentences.len(),
        start: trim_start,
        end: trim_start + trimmed.len(),
    });
}
