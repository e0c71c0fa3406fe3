use base64::{engine::general_purpose::STANDARD, Engine as _};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encodes `bytes` as a `data:` URI suitable for a draft's `image_url`.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() {
        FALLBACK_MIME
    } else {
        mime.trim()
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Like [`encode_data_uri`], but logs a warning for uploads above `warn_bytes`.
///
/// Nothing is rejected: the whole file ends up in the POST body.
pub fn encode_upload(mime: &str, bytes: &[u8], warn_bytes: usize) -> String {
    if bytes.len() > warn_bytes {
        log::warn!(
            "image upload is {} bytes (warning threshold {warn_bytes}); it is sent inline as base64",
            bytes.len()
        );
    }
    encode_data_uri(mime, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_data_uri() {
        assert_eq!(
            encode_data_uri("image/png", &[0, 0, 0]),
            "data:image/png;base64,AAAA"
        );
    }

    #[test]
    fn test_missing_mime_falls_back() {
        assert_eq!(
            encode_data_uri("", b"hi"),
            "data:application/octet-stream;base64,aGk="
        );
    }

    #[test]
    fn test_large_upload_is_not_rejected() {
        let bytes = vec![0u8; 3 * 1024];
        let uri = encode_upload("image/jpeg", &bytes, 1024);
        assert!(uri.starts_with("data:image/jpeg;base64,"));
        assert_eq!(uri.len(), "data:image/jpeg;base64,".len() + 4 * 1024);
    }
}
