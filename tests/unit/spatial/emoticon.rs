//! Tests for emoticon halves, their completion rule and signatures

#[cfg(test)]
mod tests {
    use emotiles::spatial::emoticon::{EmoticonColor, EmoticonPart, EmoticonSide, SIGNATURE_COUNT};
    use std::collections::HashSet;

    // Tests that only opposite halves of one color complete each other
    // Verified by comparing sides with == instead of !=
    #[test]
    fn test_completes_requires_same_color_and_opposite_side() {
        let red_up = EmoticonPart::new(EmoticonSide::Up, EmoticonColor::Red);
        let red_down = EmoticonPart::new(EmoticonSide::Down, EmoticonColor::Red);
        let blue_down = EmoticonPart::new(EmoticonSide::Down, EmoticonColor::Blue);

        assert!(red_up.completes(red_down));
        assert!(red_down.completes(red_up));
        assert!(!red_up.completes(red_up));
        assert!(!red_up.completes(blue_down));
    }

    // Tests the complement is the unique part completing the original
    // Verified by keeping the side in complement
    #[test]
    fn test_complement_completes_original() {
        for color in EmoticonColor::ALL {
            for side in [EmoticonSide::Up, EmoticonSide::Down] {
                let part = EmoticonPart::new(side, color);
                assert!(part.completes(part.complement()));
                assert_eq!(part.complement().complement(), part);
            }
        }
    }

    // Tests signatures are dense and distinct for every side and color
    // Verified by dropping the side term from the signature
    #[test]
    fn test_signatures_are_distinct_and_bounded() {
        let signatures: HashSet<usize> = EmoticonColor::ALL
            .into_iter()
            .flat_map(|color| {
                [EmoticonSide::Up, EmoticonSide::Down]
                    .into_iter()
                    .map(move |side| EmoticonPart::new(side, color).signature())
            })
            .collect();

        assert_eq!(signatures.len(), SIGNATURE_COUNT);
        assert!(signatures.iter().all(|&index| index < SIGNATURE_COUNT));
    }

    // Tests the text form used by the board renderer
    // Verified by swapping the side symbols
    #[test]
    fn test_display_symbols() {
        let part = EmoticonPart::new(EmoticonSide::Down, EmoticonColor::Yellow);
        let green_up = EmoticonPart::new(EmoticonSide::Up, EmoticonColor::Green);
        assert_eq!(part.to_string(), "Yv");
        assert_eq!(green_up.to_string(), "G^");
    }

    #[test]
    fn test_opposite_side() {
        assert_eq!(EmoticonSide::Up.opposite(), EmoticonSide::Down);
        assert_eq!(EmoticonSide::Down.opposite(), EmoticonSide::Up);
    }
}
