use crate::core::{Side, SideArray};

/// Token balance: own tokens minus the opponent's
pub fn material_eval(perspective: Side, counts: &SideArray<u32>) -> i32 {
    counts[perspective] as i32 - counts[!perspective] as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(12, 12 ; "even")]
    #[test_case(12, 7 ; "white ahead")]
    #[test_case(0, 3 ; "white wiped out")]
    #[test_case(24, 0 ; "black wiped out")]
    fn test_antisymmetric(white: u32, black: u32) {
        let counts = SideArray::new(white, black);
        assert_eq!(
            material_eval(Side::White, &counts),
            -material_eval(Side::Black, &counts)
        );
        assert_eq!(material_eval(Side::White, &counts), white as i32 - black as i32);
    }

    #[test]
    fn test_zero_only_when_even() {
        assert_eq!(material_eval(Side::Black, &SideArray::new(5, 5)), 0);
        assert_ne!(material_eval(Side::Black, &SideArray::new(5, 4)), 0);
    }
}
