//! Filename generation.

/// Characters that are not allowed in file names on common filesystems.
const INVALID_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace every filesystem-hostile character with `_`.
///
/// The substitution is one-to-one: the result has exactly as many
/// characters as the input.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Byte budget for the title part of a clip file name.
///
/// Leaves room for `_<id>.mp4` under the usual 255 byte name limit.
const MAX_TITLE_BYTES: usize = 200;

/// Cut `name` to at most `max_bytes` bytes on a char boundary.
fn truncate_to_bytes(name: &str, max_bytes: usize) -> &str {
    if name.len() <= max_bytes {
        return name;
    }
    let mut end = max_bytes;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

/// File name of a downloaded clip: `<title>_<id>.mp4`.
///
/// Long titles are shortened to [`MAX_TITLE_BYTES`].
pub fn clip_filename(title: &str, clip_id: &str) -> String {
    let sanitized = sanitize_filename(title);
    let title = truncate_to_bytes(&sanitized, MAX_TITLE_BYTES).trim_end();
    format!("{}_{}.mp4", title, clip_id)
}

/// Escape a path for use as a yt-dlp output template.
pub fn escape_output_template(path: &str) -> String {
    path.replace('%', "%%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("normal name"), "normal name");
        // One-to-one substitution keeps the length: the space after ":" survives
        assert_eq!(sanitize_filename(r#"Group: "Test"/Name"#), "Group_ _Test__Name");
        assert_eq!(sanitize_filename(r#"<>:"/\|?*"#), "_________");
    }

    #[test]
    fn test_sanitize_keeps_length() {
        let input = r#"Клипы: "лучшее" / 2024?"#;
        assert_eq!(
            sanitize_filename(input).chars().count(),
            input.chars().count()
        );
    }

    #[test]
    fn test_clip_filename() {
        assert_eq!(clip_filename("Cat video", "456"), "Cat video_456.mp4");
        assert_eq!(clip_filename("a/b", "1"), "a_b_1.mp4");
    }

    #[test]
    fn test_clip_filename_long_title() {
        let title = "Очень длинное описание клипа ".repeat(20);
        let name = clip_filename(&title, "456239017");

        assert!(name.len() <= 255);
        assert!(name.ends_with("_456239017.mp4"));
        assert!(title.starts_with(name.trim_end_matches("_456239017.mp4")));
    }

    #[test]
    fn test_truncate_to_bytes() {
        assert_eq!(truncate_to_bytes("short", 10), "short");
        // "ж" is two bytes; never split it
        assert_eq!(truncate_to_bytes("ab\u{436}", 3), "ab");
        assert_eq!(truncate_to_bytes("ab\u{436}", 4), "ab\u{436}");
    }

    #[test]
    fn test_escape_output_template() {
        assert_eq!(escape_output_template("clips/100%_1.mp4"), "clips/100%%_1.mp4");
    }
}
