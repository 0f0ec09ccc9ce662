/// Decoded value paired with transport metadata. Created once per completed
/// execution and handed to exactly one caller.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub value: T,
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

impl<T> Response<T> {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
