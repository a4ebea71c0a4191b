//! Roman numerals, used to label chapters.

const NUMERALS: [(usize, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Uppercase Roman numeral for `n`, greedy over the largest value that fits. Zero is the
/// empty string.
pub fn to_roman(mut n: usize) -> String {
    let mut out = String::new();
    for &(value, numeral) in NUMERALS.iter() {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}
