use tracing::debug;

pub fn apply<F>(f: F, text: &str) -> usize
where
    F: Fn(&str) -> usize,
{
    f(text)
}

/// Number of characters in `text`, counted as Unicode scalar values.
pub fn length_of(text: &str) -> usize {
    let len = |s: &str| s.chars().count();
    let n = apply(len, text);
    debug!(text, n, "measured");
    n
}
