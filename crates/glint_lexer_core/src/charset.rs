//! Compile-time ASCII byte classes.
//!
//! A [`ByteSet`] is a 256-entry membership table built in a `const`
//! context, so a membership test is a single indexed load. Members must be
//! ASCII: a scan that stops on a member or non-member byte therefore
//! always stops on a UTF-8 character boundary.

/// Membership table over bytes; only ASCII bytes can be members.
#[derive(Clone, Copy)]
pub struct ByteSet([bool; 256]);

impl ByteSet {
    /// Build a set from an ASCII byte string.
    ///
    /// Panics at compile time when given a non-ASCII byte.
    pub const fn new(members: &[u8]) -> Self {
        let mut table = [false; 256];
        let mut i = 0;
        while i < members.len() {
            assert!(members[i] < 0x80, "ByteSet members must be ASCII");
            table[members[i] as usize] = true;
            i += 1;
        }
        Self(table)
    }

    /// Set of every byte in the inclusive ASCII range `lo..=hi`.
    pub const fn range(lo: u8, hi: u8) -> Self {
        assert!(hi < 0x80, "ByteSet members must be ASCII");
        let mut table = [false; 256];
        let mut b = lo;
        while b <= hi {
            table[b as usize] = true;
            if b == hi {
                break;
            }
            b += 1;
        }
        Self(table)
    }

    /// Union of two sets.
    pub const fn with(self, other: ByteSet) -> Self {
        let mut table = self.0;
        let mut i = 0;
        while i < 256 {
            table[i] = table[i] || other.0[i];
            i += 1;
        }
        Self(table)
    }

    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.0[byte as usize]
    }
}

impl std::fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members: String = (0u8..0x80)
            .filter(|&b| self.contains(b))
            .map(char::from)
            .collect();
        f.debug_tuple("ByteSet").field(&members).finish()
    }
}

pub const DIGITS: ByteSet = ByteSet::range(b'0', b'9');
pub const HEX_DIGITS: ByteSet = DIGITS
    .with(ByteSet::range(b'a', b'f'))
    .with(ByteSet::range(b'A', b'F'));
pub const OCT_DIGITS: ByteSet = ByteSet::range(b'0', b'7');
pub const BIN_DIGITS: ByteSet = ByteSet::new(b"01");

pub const ASCII_LETTERS: ByteSet = ByteSet::range(b'a', b'z').with(ByteSet::range(b'A', b'Z'));
pub const IDENT_START: ByteSet = ASCII_LETTERS.with(ByteSet::new(b"_"));
pub const IDENT_CONTINUE: ByteSet = IDENT_START.with(DIGITS);

/// Horizontal and vertical whitespace, including `\r` and form feed.
pub const WHITESPACE: ByteSet = ByteSet::new(b" \t\n\r\x0b\x0c");
/// Whitespace that never ends a line.
pub const HORIZONTAL_SPACE: ByteSet = ByteSet::new(b" \t\x0b\x0c");
