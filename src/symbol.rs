use std::fmt::Debug;
use std::hash::Hash;


/// A unit of input that can be stored in the container header by its code point.
pub trait Symbol: Copy + Eq + Hash + Debug {

    fn code_point(self) -> u64;

    /// Returns `None` if `code_point` does not name a valid symbol.
    fn from_code_point(code_point: u64) -> Option<Self>;

}


impl Symbol for char {

    fn code_point(self) -> u64 {
        self as u64
    }


    fn from_code_point(code_point: u64) -> Option<Self> {
        u32::try_from(code_point)
            .ok()
            .and_then(char::from_u32)
    }

}


impl Symbol for u8 {

    fn code_point(self) -> u64 {
        self as u64
    }


    fn from_code_point(code_point: u64) -> Option<Self> {
        u8::try_from(code_point).ok()
    }

}


#[cfg(test)]
mod tests {

    use super::*;


    #[test]
    fn check_char_code_points() {

        assert_eq!('a'.code_point(), 97);
        assert_eq!(char::from_code_point(0x1F600), Some('😀'));

        // Surrogates and values past the Unicode range are rejected
        assert_eq!(char::from_code_point(0xD800), None);
        assert_eq!(char::from_code_point(0x110000), None);
        assert_eq!(char::from_code_point(u64::MAX), None);
    }


    #[test]
    fn check_byte_code_points() {

        assert_eq!(0xff_u8.code_point(), 255);
        assert_eq!(u8::from_code_point(255), Some(0xff));
        assert_eq!(u8::from_code_point(256), None);
    }

}
