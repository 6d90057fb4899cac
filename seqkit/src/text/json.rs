/// Whether `text` parses as JSON.
pub fn is_valid_json(text: &str) -> bool {
    json::parse(text).is_ok()
}
