/// Returns the greeting the `cli` binary prints on startup.
///
/// The value is a constant; callers can rely on exact, case-sensitive
/// equality with `"CLI: Hi!"`.
pub fn greet() -> &'static str {
    "CLI: Hi!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet() {
        assert_eq!(greet(), "CLI: Hi!");
    }

    #[test]
    fn test_greet_is_deterministic() {
        let first = greet();
        let second = greet();
        assert_eq!(first, second);
        assert_eq!(second, "CLI: Hi!");
    }
}
