use crate::error::{Error, Result};

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Pull the playlist id out of a YouTube URL.
///
/// Looks for a `list=` query parameter introduced by `?` or `&` and reads the
/// id characters that follow it. Input that is already a bare id is accepted
/// as-is, so callers can paste an id copied from elsewhere.
pub fn extract_playlist_id(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("no playlist URL or id given".into()));
    }

    for (at, _) in trimmed.match_indices("list=") {
        let preceding = at.checked_sub(1).and_then(|i| trimmed.as_bytes().get(i));
        if !matches!(preceding, Some(b'?') | Some(b'&')) {
            continue;
        }
        let id: String = trimmed[at + 5..]
            .chars()
            .take_while(|&c| is_id_char(c))
            .collect();
        if !id.is_empty() {
            return Ok(id);
        }
    }

    if trimmed.chars().all(is_id_char) {
        return Ok(trimmed.to_string());
    }

    Err(Error::Validation(format!(
        "no playlist id found in {trimmed:?}"
    )))
}
