/// Width, measured in characters.
pub type Width = usize;
/// Column, measured in characters. The origin is column 0.
pub type Col = usize;

/// The number of columns `s` occupies: one per `char`.
pub fn str_width(s: &str) -> Width {
    s.chars().count()
}
