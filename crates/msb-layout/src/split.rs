//! The fixed set of split sizes offered on the landing screen.

use crate::error::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitCount {
    Two,
    Three,
    Four,
}

impl SplitCount {
    pub fn get(self) -> usize {
        match self {
            SplitCount::Two => 2,
            SplitCount::Three => 3,
            SplitCount::Four => 4,
        }
    }
}

impl TryFrom<u32> for SplitCount {
    type Error = LayoutError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(SplitCount::Two),
            3 => Ok(SplitCount::Three),
            4 => Ok(SplitCount::Four),
            other => Err(LayoutError::InvalidSplitCount(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_through_four() {
        assert_eq!(SplitCount::try_from(2u32), Ok(SplitCount::Two));
        assert_eq!(SplitCount::try_from(3u32), Ok(SplitCount::Three));
        assert_eq!(SplitCount::try_from(4u32), Ok(SplitCount::Four));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            SplitCount::try_from(1u32),
            Err(LayoutError::InvalidSplitCount(1))
        );
        assert_eq!(
            SplitCount::try_from(5u32),
            Err(LayoutError::InvalidSplitCount(5))
        );
        assert!(SplitCount::try_from(0u32).is_err());
    }

    #[test]
    fn error_message_names_value() {
        let err = SplitCount::try_from(7u32).unwrap_err();
        assert_eq!(err.to_string(), "split count must be 2, 3 or 4 (got 7)");
    }
}
