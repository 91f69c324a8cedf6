// ABOUTME: Byte-stream decoding for HTML input in arbitrary character encodings.
// ABOUTME: Honors a caller-supplied encoding label, falling back to charset sniffing.

/// Decodes an HTML byte string to UTF-8 text.
///
/// A recognized `label` (e.g. `"windows-1252"`, `"iso-8859-1"`) is honored
/// directly. With no label, or an unknown one, the encoding is sniffed from
/// the bytes themselves.
pub fn decode(bytes: &[u8], label: Option<&str>) -> String {
    if let Some(label) = label {
        if let Some(encoding) = encoding_rs::Encoding::for_label(label.as_bytes()) {
            let (decoded, _, _) = encoding.decode(bytes);
            return decoded.into_owned();
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}
