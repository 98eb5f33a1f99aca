use anyhow::{anyhow, Result};

/// Resolves `key` against `candidates`, case-insensitively.
///
/// An exact match wins; otherwise `key` must be the prefix of exactly one
/// candidate. The returned slice is the candidate as written.
pub fn expand_key<'a>(key: &str, candidates: &[&'a str]) -> Result<&'a str> {
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return Err(anyhow!("Empty key"));
    }

    // 1. Exact match
    if let Some(exact) = candidates.iter().find(|c| c.to_lowercase() == key) {
        return Ok(*exact);
    }

    // 2. Prefix match
    let matches: Vec<&'a str> = candidates
        .iter()
        .filter(|c| c.to_lowercase().starts_with(&key))
        .copied()
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_key() {
        let candidates = vec!["Fall", "Spring", "Spring/Summer", "Winter"];

        assert_eq!(expand_key("f", &candidates).unwrap(), "Fall");
        assert_eq!(expand_key("WIN", &candidates).unwrap(), "Winter");
        assert_eq!(expand_key("spring", &candidates).unwrap(), "Spring");
        assert_eq!(expand_key("spring/", &candidates).unwrap(), "Spring/Summer");

        // Ambiguous
        assert!(expand_key("s", &candidates).is_err());
        assert!(expand_key("spr", &candidates).is_err());

        // Unknown
        assert!(expand_key("autumn", &candidates).is_err());
        assert!(expand_key("  ", &candidates).is_err());
    }
}
