/// Turns user-supplied rich text into HTML that is safe to render.
pub trait BioSanitizer: Send + Sync {
    fn sanitize(&self, html: &str) -> String;
}
