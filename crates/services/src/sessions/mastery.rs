/// Consecutive correct answers in one script that master the answered symbol.
pub const MASTERY_STREAK_THRESHOLD: u32 = 3;

#[must_use]
pub fn reaches_mastery(streak: u32) -> bool {
    streak >= MASTERY_STREAK_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_three() {
        assert!(!reaches_mastery(2));
        assert!(reaches_mastery(3));
        assert!(reaches_mastery(7));
    }
}
