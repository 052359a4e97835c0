//! Session Persistence
//!
//! The bearer token and signed-in email live in `localStorage`, JSON-encoded
//! the way the backend hands them out.

use web_sys::Storage;

const TOKEN_KEY: &str = "token";
const EMAIL_KEY: &str = "email";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read(key: &str) -> Option<String> {
    decode(&storage()?.get_item(key).ok()??)
}

fn write(key: &str, value: Option<&str>) {
    let Some(storage) = storage() else {
        log::warn!("localStorage unavailable, {} not persisted", key);
        return;
    };
    let result = match value {
        Some(v) => storage.set_item(key, &encode(v)),
        None => storage.remove_item(key),
    };
    if result.is_err() {
        log::warn!("Failed to persist {}", key);
    }
}

/// Token persisted by a previous sign-in, read once at startup
pub fn load_token() -> Option<String> {
    read(TOKEN_KEY)
}

pub fn load_email() -> Option<String> {
    read(EMAIL_KEY)
}

pub fn save(token: &str, email: &str) {
    write(TOKEN_KEY, Some(token));
    write(EMAIL_KEY, Some(email));
}

pub fn clear() {
    write(TOKEN_KEY, None);
    write(EMAIL_KEY, None);
}

/// Stored values are JSON strings; an empty or `null` entry counts as absent
fn decode(raw: &str) -> Option<String> {
    match serde_json::from_str::<Option<String>>(raw) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(_) => None,
    }
}

fn encode(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_string() {
        assert_eq!(decode(r#""abc.def""#), Some("abc.def".to_string()));
        assert_eq!(decode("null"), None);
        assert_eq!(decode(r#""""#), None);
        assert_eq!(decode("not json"), None);
    }

    #[test]
    fn test_encode_roundtrips_quotes() {
        let raw = encode(r#"we"ird"#);
        assert_eq!(decode(&raw), Some(r#"we"ird"#.to_string()));
    }
}
