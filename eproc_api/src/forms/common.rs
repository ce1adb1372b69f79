//! Shared form infrastructure: the [`Form`] trait and content types.

use url::form_urlencoded;

/// Plain form content type.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Form content type with an explicit charset, as the portal's AJAX calls send it.
pub const FORM_URLENCODED_UTF8: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Trait implemented by every form the crawler posts to the portal.
///
/// Field order is preserved exactly as returned by [`Form::fields`]; repeated
/// names are allowed.
pub trait Form {
    /// Ordered `(name, value)` pairs of the form.
    fn fields(&self) -> Vec<(&'static str, String)>;

    /// Content type sent with the encoded body.
    fn content_type(&self) -> &'static str {
        FORM_URLENCODED
    }

    /// Encodes the fields as an `application/x-www-form-urlencoded` body.
    fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.fields() {
            serializer.append_pair(name, &value);
        }
        serializer.finish()
    }
}
