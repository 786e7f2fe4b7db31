/// Reset rules placed first in every boundary stylesheet.
/// Cuts inheritance at the host and normalizes box sizing inside.
pub const RESET_STYLES: &str = "
:host {
  all: initial;
  display: block;
}
*,
::slotted(*) {
  box-sizing: border-box;
}
";

/// Full text of a boundary style element: reset rules, then the caller's sheet
pub fn compose_styles(custom: Option<&str>) -> String {
    let custom = custom.unwrap_or_default();
    let mut text = String::with_capacity(RESET_STYLES.len() + custom.len());
    text.push_str(RESET_STYLES);
    text.push_str(custom);
    text
}
