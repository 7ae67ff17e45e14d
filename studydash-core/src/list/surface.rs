/// Display target for a list
///
/// Every call replaces whatever was shown before with `rows`.
pub trait RenderSurface<T>: Send + Sync {
    fn render(&mut self, rows: &[T]);
}
