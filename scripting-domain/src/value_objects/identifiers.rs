// Selector value object

use std::fmt;

/// Id-or-name reference to an item or character. Callers pick the variant
/// up front; the engine never probes the runtime type of an argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Id(u32),
    Name(String),
}

impl From<u32> for Selector {
    fn from(id: u32) -> Self {
        Selector::Id(id)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Name(name.to_string())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::Name(name)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{}", id),
            Selector::Name(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_right_variant() {
        assert_eq!(Selector::from(42), Selector::Id(42));
        assert_eq!(Selector::from("Hat"), Selector::Name("Hat".to_string()));
    }

    #[test]
    fn display_marks_ids() {
        assert_eq!(Selector::Id(5).to_string(), "#5");
        assert_eq!(Selector::Name("Hat".to_string()).to_string(), "Hat");
    }
}
