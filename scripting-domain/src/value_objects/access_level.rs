// Access level value object

use serde::{Deserialize, Serialize};

/// Ordered role tiers. Checks are at-least-threshold comparisons, so an
/// admin passes every lower check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum AccessLevel {
    #[default]
    Player,
    Tester,
    Moderator,
    Admin,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Player => "Player",
            AccessLevel::Tester => "Tester",
            AccessLevel::Moderator => "Moderator",
            AccessLevel::Admin => "Admin",
        }
    }

    /// Numeric access field as the host reports it.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => AccessLevel::Player,
            1 => AccessLevel::Tester,
            2 => AccessLevel::Moderator,
            _ => AccessLevel::Admin,
        }
    }

    /// Tester or above.
    pub fn is_staff(self) -> bool {
        self >= AccessLevel::Tester
    }

    pub fn is_tester(self) -> bool {
        self >= AccessLevel::Tester
    }

    pub fn is_moderator(self) -> bool {
        self >= AccessLevel::Moderator
    }

    pub fn is_admin(self) -> bool {
        self >= AccessLevel::Admin
    }
}

impl From<&str> for AccessLevel {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "tester" => AccessLevel::Tester,
            "moderator" => AccessLevel::Moderator,
            "admin" => AccessLevel::Admin,
            _ => AccessLevel::Player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(AccessLevel::Player < AccessLevel::Tester);
        assert!(AccessLevel::Tester < AccessLevel::Moderator);
        assert!(AccessLevel::Moderator < AccessLevel::Admin);
    }

    #[test]
    fn threshold_checks() {
        assert!(AccessLevel::Tester.is_staff());
        assert!(!AccessLevel::Player.is_staff());
        assert!(AccessLevel::Admin.is_moderator());
        assert!(!AccessLevel::Moderator.is_admin());
    }

    #[test]
    fn numeric_levels_map_onto_tiers() {
        assert_eq!(AccessLevel::from_level(0), AccessLevel::Player);
        assert_eq!(AccessLevel::from_level(2), AccessLevel::Moderator);
        assert_eq!(AccessLevel::from_level(9), AccessLevel::Admin);
    }
}
