/// Display casing for tag names: lower-case everything, upper-case the
/// first character. Empty input comes back unchanged.
pub fn capitalize_first_letter(value: &str) -> String {
    let lowered = value.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => lowered,
    }
}

/// Escapes `%`, `_` and `\` so a user-supplied match string is treated as a
/// literal substring by LIKE/ILIKE (paired with `ESCAPE '\'` on the query).
pub fn escape_like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
