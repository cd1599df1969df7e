//! Text styling attributes.

use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes (bold, dim, inverse, etc.).
    ///
    /// Attributes are bitflags and combine with bitwise OR. Nested decorators
    /// merge their attributes onto the text they wrap.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD      = 0x01;
        /// Dim/decreased intensity.
        const DIM       = 0x02;
        /// Underlined text.
        const UNDERLINE = 0x04;
        /// Blinking text.
        const BLINK     = 0x08;
        /// Swapped foreground/background.
        const INVERSE   = 0x10;
    }
}
