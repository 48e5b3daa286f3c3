/// Pages call this on mount so route changes always land at the top.
pub fn scroll_to_top() {
  if let Some(window) = web_sys::window() {
    window.scroll_to_with_x_and_y(0.0, 0.0);
  }
}
