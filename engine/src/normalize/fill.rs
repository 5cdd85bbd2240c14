/// Carries the last present value down over missing entries. Entries before
/// the first present value stay missing.
pub fn forward_fill<T: Clone>(values: &[Option<T>]) -> Vec<Option<T>> {
    let mut last: Option<T> = None;
    values
        .iter()
        .map(|v| {
            if let Some(present) = v {
                last = Some(present.clone());
            }
            last.clone()
        })
        .collect()
}
