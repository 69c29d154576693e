//! Bundled stylesheet

/// Stylesheet inlined into standalone pages.
pub const STYLESHEET: &str = include_str!("../assets/markline.css");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_styles_record_card() {
        // Arrange & Act & Assert
        assert!(STYLESHEET.contains(".container"));
        assert!(STYLESHEET.contains(".record-details"));
    }
}
