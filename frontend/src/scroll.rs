/// Index of the section whose band contains the viewport centre.
///
/// Exactly half-way between two sections resolves to the earlier one.
pub fn active_section_index(scroll_top: f64, viewport_height: f64, section_count: usize) -> usize {
    if section_count == 0 || viewport_height <= 0.0 || !scroll_top.is_finite() {
        return 0;
    }
    let center = scroll_top + viewport_height / 2.0;
    let position = center / viewport_height - 0.5;
    // round half down
    let index = (position - 0.5).ceil().max(0.0) as usize;
    index.min(section_count - 1)
}

/// Fraction of the scrollable distance already travelled, in [0, 1].
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}
