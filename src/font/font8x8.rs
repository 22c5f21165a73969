// src/font/font8x8.rs

//! Built-in 8x8 bitmap font data.
//!
//! Derived from the public domain font8x8 tables by Daniel Hepper, which are
//! based on the IBM PC BIOS fonts. Rows are stored as published: bit 0 is the
//! leftmost pixel. [`crate::glyph::Glyph::from_lsb_rows`] converts them to the
//! MSB-left layout used everywhere else.

/// Printable ASCII, U+0020 (space) to U+007E (tilde).
#[rustfmt::skip]
pub const PRINTABLE_ASCII: [[u8; 8]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0020 ( )
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // U+0021 (!)
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0022 (")
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // U+0023 (#)
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], // U+0024 ($)
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], // U+0025 (%)
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // U+0026 (&)
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0027 (')
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], // U+0028 (()
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], // U+0029 ())
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // U+002A (*)
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], // U+002B (+)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], // U+002C (,)
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // U+002D (-)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // U+002E (.)
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // U+002F (/)
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // U+0030 (0)
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // U+0031 (1)
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // U+0032 (2)
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // U+0033 (3)
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // U+0034 (4)
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // U+0035 (5)
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // U+0036 (6)
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // U+0037 (7)
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+0038 (8)
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // U+0039 (9)
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], // U+003A (:)
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], // U+003B (;)
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], // U+003C (<)
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], // U+003D (=)
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], // U+003E (>)
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], // U+003F (?)
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], // U+0040 (@)
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+0041 (A)
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // U+0042 (B)
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], // U+0043 (C)
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], // U+0044 (D)
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // U+0045 (E)
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], // U+0046 (F)
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], // U+0047 (G)
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // U+0048 (H)
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0049 (I)
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], // U+004A (J)
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // U+004B (K)
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], // U+004C (L)
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // U+004D (M)
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // U+004E (N)
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // U+004F (O)
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // U+0050 (P)
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], // U+0051 (Q)
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], // U+0052 (R)
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], // U+0053 (S)
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0054 (T)
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U+0055 (U)
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // U+0056 (V)
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // U+0057 (W)
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // U+0058 (X)
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // U+0059 (Y)
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // U+005A (Z)
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], // U+005B ([)
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // U+005C (\)
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], // U+005D (])
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // U+005E (^)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // U+005F (_)
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0060 (`)
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+0061 (a)
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], // U+0062 (b)
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], // U+0063 (c)
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // U+0064 (d)
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+0065 (e)
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // U+0066 (f)
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+0067 (g)
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // U+0068 (h)
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0069 (i)
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // U+006A (j)
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // U+006B (k)
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+006C (l)
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // U+006D (m)
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // U+006E (n)
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+006F (o)
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // U+0070 (p)
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // U+0071 (q)
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // U+0072 (r)
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // U+0073 (s)
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+0074 (t)
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+0075 (u)
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // U+0076 (v)
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // U+0077 (w)
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // U+0078 (x)
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+0079 (y)
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // U+007A (z)
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // U+007B ({)
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // U+007C (|)
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // U+007D (})
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+007E (~)
];

/// Latin-1 supplement, U+00A0 (no-break space) to U+00FF (y diaeresis).
#[rustfmt::skip]
pub const LATIN1_SUPPLEMENT: [[u8; 8]; 96] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00A0 (no-break space)
    [0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x18, 0x00], // U+00A1 (inverted exclamation)
    [0x18, 0x18, 0x7E, 0x03, 0x03, 0x7E, 0x18, 0x18], // U+00A2 (cent)
    [0x1C, 0x36, 0x26, 0x0F, 0x06, 0x67, 0x3F, 0x00], // U+00A3 (pound)
    [0x00, 0x00, 0x63, 0x3E, 0x36, 0x3E, 0x63, 0x00], // U+00A4 (currency)
    [0x33, 0x33, 0x1E, 0x3F, 0x0C, 0x3F, 0x0C, 0x0C], // U+00A5 (yen)
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // U+00A6 (broken bar)
    [0x7C, 0xC6, 0x1C, 0x36, 0x36, 0x1C, 0x33, 0x1E], // U+00A7 (section)
    [0x33, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00A8 (diaeresis)
    [0x3C, 0x42, 0x99, 0x85, 0x85, 0x99, 0x42, 0x3C], // U+00A9 (copyright)
    [0x3C, 0x36, 0x36, 0x7C, 0x00, 0x00, 0x00, 0x00], // U+00AA (feminine ordinal)
    [0x00, 0xCC, 0x66, 0x33, 0x66, 0xCC, 0x00, 0x00], // U+00AB (left guillemet)
    [0x00, 0x00, 0x00, 0x3F, 0x30, 0x30, 0x00, 0x00], // U+00AC (not)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00AD (soft hyphen)
    [0x3C, 0x42, 0x9D, 0xA5, 0x9D, 0xA5, 0x42, 0x3C], // U+00AE (registered)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00AF (macron)
    [0x38, 0x6C, 0x6C, 0x38, 0x00, 0x00, 0x00, 0x00], // U+00B0 (degree)
    [0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x7E, 0x00], // U+00B1 (plus-minus)
    [0x1C, 0x30, 0x18, 0x0C, 0x3C, 0x00, 0x00, 0x00], // U+00B2 (superscript two)
    [0x1C, 0x30, 0x18, 0x30, 0x1C, 0x00, 0x00, 0x00], // U+00B3 (superscript three)
    [0x18, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00B4 (acute accent)
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x03], // U+00B5 (micro)
    [0xFE, 0xDB, 0xDB, 0xDE, 0xD8, 0xD8, 0xD8, 0x00], // U+00B6 (pilcrow)
    [0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00], // U+00B7 (middle dot)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x0C, 0x0C], // U+00B8 (cedilla)
    [0x08, 0x0C, 0x08, 0x1C, 0x00, 0x00, 0x00, 0x00], // U+00B9 (superscript one)
    [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00], // U+00BA (masculine ordinal)
    [0x00, 0x33, 0x66, 0xCC, 0x66, 0x33, 0x00, 0x00], // U+00BB (right guillemet)
    [0xC3, 0x63, 0x33, 0xBD, 0xEC, 0xF6, 0xF3, 0x03], // U+00BC (one quarter)
    [0xC3, 0x63, 0x33, 0x7B, 0xCC, 0x66, 0x33, 0xF0], // U+00BD (one half)
    [0x03, 0xC4, 0x63, 0xB4, 0xDB, 0xAC, 0xE6, 0x80], // U+00BE (three quarters)
    [0x0C, 0x00, 0x0C, 0x06, 0x03, 0x33, 0x1E, 0x00], // U+00BF (inverted question)
    [0x07, 0x00, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x00], // U+00C0 (A grave)
    [0x38, 0x00, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x00], // U+00C1 (A acute)
    [0x1E, 0x00, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x00], // U+00C2 (A circumflex)
    [0x6E, 0x3B, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x00], // U+00C3 (A tilde)
    [0x33, 0x00, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x00], // U+00C4 (A diaeresis)
    [0x0C, 0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x00], // U+00C5 (A ring)
    [0x7C, 0x36, 0x33, 0x7F, 0x33, 0x33, 0x73, 0x00], // U+00C6 (AE)
    [0x1E, 0x33, 0x03, 0x33, 0x1E, 0x18, 0x30, 0x1E], // U+00C7 (C cedilla)
    [0x07, 0x00, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // U+00C8 (E grave)
    [0x38, 0x00, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // U+00C9 (E acute)
    [0x0C, 0x12, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // U+00CA (E circumflex)
    [0x36, 0x00, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // U+00CB (E diaeresis)
    [0x07, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CC (I grave)
    [0x38, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CD (I acute)
    [0x0C, 0x12, 0x00, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // U+00CE (I circumflex)
    [0x33, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CF (I diaeresis)
    [0x3F, 0x66, 0x6F, 0x6F, 0x66, 0x66, 0x3F, 0x00], // U+00D0 (Eth)
    [0x3F, 0x00, 0x33, 0x37, 0x3F, 0x3B, 0x33, 0x00], // U+00D1 (N tilde)
    [0x0E, 0x00, 0x18, 0x3C, 0x66, 0x3C, 0x18, 0x00], // U+00D2 (O grave)
    [0x70, 0x00, 0x18, 0x3C, 0x66, 0x3C, 0x18, 0x00], // U+00D3 (O acute)
    [0x3C, 0x66, 0x18, 0x3C, 0x66, 0x3C, 0x18, 0x00], // U+00D4 (O circumflex)
    [0x6E, 0x3B, 0x00, 0x3E, 0x63, 0x63, 0x3E, 0x00], // U+00D5 (O tilde)
    [0xC3, 0x18, 0x3C, 0x66, 0x66, 0x3C, 0x18, 0x00], // U+00D6 (O diaeresis)
    [0x00, 0x36, 0x1C, 0x08, 0x1C, 0x36, 0x00, 0x00], // U+00D7 (multiplication)
    [0x5C, 0x36, 0x73, 0x7B, 0x6F, 0x36, 0x1D, 0x00], // U+00D8 (O stroke)
    [0x0E, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00D9 (U grave)
    [0x70, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00DA (U acute)
    [0x3C, 0x66, 0x00, 0x66, 0x66, 0x66, 0x3C, 0x00], // U+00DB (U circumflex)
    [0x33, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00DC (U diaeresis)
    [0x70, 0x00, 0x66, 0x66, 0x3C, 0x18, 0x3C, 0x00], // U+00DD (Y acute)
    [0x0F, 0x06, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x0F], // U+00DE (Thorn)
    [0x00, 0x1E, 0x33, 0x1F, 0x33, 0x1F, 0x03, 0x03], // U+00DF (sharp s)
    [0x07, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // U+00E0 (a grave)
    [0x38, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // U+00E1 (a acute)
    [0x7E, 0xC3, 0x3C, 0x60, 0x7C, 0x66, 0xFC, 0x00], // U+00E2 (a circumflex)
    [0x6E, 0x3B, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // U+00E3 (a tilde)
    [0x33, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // U+00E4 (a diaeresis)
    [0x0C, 0x0C, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // U+00E5 (a ring)
    [0x00, 0x00, 0xFE, 0x30, 0xFE, 0x33, 0xFE, 0x00], // U+00E6 (ae)
    [0x00, 0x00, 0x1E, 0x03, 0x03, 0x1E, 0x30, 0x1C], // U+00E7 (c cedilla)
    [0x07, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00E8 (e grave)
    [0x38, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00E9 (e acute)
    [0x7E, 0xC3, 0x3C, 0x66, 0x7E, 0x06, 0x3C, 0x00], // U+00EA (e circumflex)
    [0x33, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00EB (e diaeresis)
    [0x07, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00EC (i grave)
    [0x1C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00ED (i acute)
    [0x3E, 0x63, 0x1C, 0x18, 0x18, 0x18, 0x3C, 0x00], // U+00EE (i circumflex)
    [0x33, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00EF (i diaeresis)
    [0x1B, 0x0E, 0x1B, 0x30, 0x3E, 0x33, 0x1E, 0x00], // U+00F0 (eth)
    [0x00, 0x1F, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x00], // U+00F1 (n tilde)
    [0x00, 0x07, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+00F2 (o grave)
    [0x00, 0x38, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+00F3 (o acute)
    [0x1E, 0x33, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+00F4 (o circumflex)
    [0x6E, 0x3B, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+00F5 (o tilde)
    [0x00, 0x33, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+00F6 (o diaeresis)
    [0x18, 0x18, 0x00, 0x7E, 0x00, 0x18, 0x18, 0x00], // U+00F7 (division)
    [0x00, 0x60, 0x3C, 0x76, 0x7E, 0x6E, 0x3C, 0x06], // U+00F8 (o stroke)
    [0x00, 0x07, 0x00, 0x33, 0x33, 0x33, 0x7E, 0x00], // U+00F9 (u grave)
    [0x00, 0x38, 0x00, 0x33, 0x33, 0x33, 0x7E, 0x00], // U+00FA (u acute)
    [0x1E, 0x33, 0x00, 0x33, 0x33, 0x33, 0x7E, 0x00], // U+00FB (u circumflex)
    [0x00, 0x33, 0x00, 0x33, 0x33, 0x33, 0x7E, 0x00], // U+00FC (u diaeresis)
    [0x00, 0x38, 0x00, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+00FD (y acute)
    [0x00, 0x00, 0x06, 0x3E, 0x66, 0x3E, 0x06, 0x00], // U+00FE (thorn)
    [0x00, 0x33, 0x00, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+00FF (y diaeresis)
];

/// Greek and Coptic, U+0390 to U+03C9.
///
/// U+03A2 has no character assigned; its slot holds a placeholder bitmap and
/// is skipped when the table is loaded.
#[rustfmt::skip]
pub const GREEK: [[u8; 8]; 58] = [
    [0x2D, 0x00, 0x0C, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+0390 (iota with dialytika and tonos)
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+0391 (Alpha)
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // U+0392 (Beta)
    [0x3F, 0x33, 0x03, 0x03, 0x03, 0x03, 0x03, 0x00], // U+0393 (Gamma)
    [0x08, 0x1C, 0x1C, 0x36, 0x36, 0x63, 0x7F, 0x00], // U+0394 (Delta)
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // U+0395 (Epsilon)
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // U+0396 (Zeta)
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // U+0397 (Eta)
    [0x1C, 0x36, 0x63, 0x7F, 0x63, 0x36, 0x1C, 0x00], // U+0398 (Theta)
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0399 (Iota)
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // U+039A (Kappa)
    [0x08, 0x1C, 0x1C, 0x36, 0x36, 0x63, 0x63, 0x00], // U+039B (Lambda)
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // U+039C (Mu)
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // U+039D (Nu)
    [0x7F, 0x63, 0x00, 0x3E, 0x00, 0x63, 0x7F, 0x00], // U+039E (Xi)
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // U+039F (Omicron)
    [0x7F, 0x36, 0x36, 0x36, 0x36, 0x36, 0x36, 0x00], // U+03A0 (Pi)
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // U+03A1 (Rho)
    [0x00, 0x01, 0x02, 0x04, 0x4F, 0x90, 0xA0, 0x40], // U+03A2 (unassigned)
    [0x7F, 0x63, 0x06, 0x0C, 0x06, 0x63, 0x7F, 0x00], // U+03A3 (Sigma)
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+03A4 (Tau)
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // U+03A5 (Upsilon)
    [0x18, 0x7E, 0xDB, 0xDB, 0xDB, 0x7E, 0x18, 0x00], // U+03A6 (Phi)
    [0x63, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x63, 0x00], // U+03A7 (Chi)
    [0xDB, 0xDB, 0xDB, 0x7E, 0x18, 0x18, 0x3C, 0x00], // U+03A8 (Psi)
    [0x3E, 0x63, 0x63, 0x63, 0x36, 0x36, 0x77, 0x00], // U+03A9 (Omega)
    [0x33, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+03AA (Iota with dialytika)
    [0x33, 0x00, 0x33, 0x33, 0x1E, 0x0C, 0x1E, 0x00], // U+03AB (Upsilon with dialytika)
    [0x70, 0x00, 0x6E, 0x3B, 0x13, 0x3B, 0x6E, 0x00], // U+03AC (alpha with tonos)
    [0x38, 0x00, 0x1E, 0x03, 0x0E, 0x03, 0x1E, 0x00], // U+03AD (epsilon with tonos)
    [0x38, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x30], // U+03AE (eta with tonos)
    [0x38, 0x00, 0x0C, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+03AF (iota with tonos)
    [0x2D, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+03B0 (upsilon with dialytika and tonos)
    [0x00, 0x00, 0x6E, 0x3B, 0x13, 0x3B, 0x6E, 0x00], // U+03B1 (alpha)
    [0x00, 0x1E, 0x33, 0x1F, 0x33, 0x1F, 0x03, 0x03], // U+03B2 (beta)
    [0x00, 0x00, 0x33, 0x33, 0x1E, 0x0C, 0x06, 0x00], // U+03B3 (gamma)
    [0x38, 0x0C, 0x18, 0x3E, 0x33, 0x33, 0x1E, 0x00], // U+03B4 (delta)
    [0x00, 0x00, 0x1E, 0x03, 0x0E, 0x03, 0x1E, 0x00], // U+03B5 (epsilon)
    [0x00, 0x3F, 0x06, 0x03, 0x03, 0x1E, 0x30, 0x1C], // U+03B6 (zeta)
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x30], // U+03B7 (eta)
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x33, 0x1E, 0x00], // U+03B8 (theta)
    [0x00, 0x00, 0x0C, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+03B9 (iota)
    [0x00, 0x00, 0x33, 0x1B, 0x0F, 0x1B, 0x33, 0x00], // U+03BA (kappa)
    [0x00, 0x03, 0x06, 0x0C, 0x1C, 0x36, 0x63, 0x00], // U+03BB (lambda)
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x03], // U+03BC (mu)
    [0x00, 0x00, 0x33, 0x33, 0x1E, 0x1E, 0x0C, 0x00], // U+03BD (nu)
    [0x1E, 0x03, 0x0E, 0x03, 0x03, 0x1E, 0x30, 0x1C], // U+03BE (xi)
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+03BF (omicron)
    [0x00, 0x00, 0x7F, 0x36, 0x36, 0x36, 0x36, 0x00], // U+03C0 (pi)
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x1F, 0x03, 0x03], // U+03C1 (rho)
    [0x00, 0x00, 0x1E, 0x03, 0x03, 0x1E, 0x30, 0x1C], // U+03C2 (final sigma)
    [0x00, 0x00, 0x7E, 0x1B, 0x1B, 0x1B, 0x0E, 0x00], // U+03C3 (sigma)
    [0x00, 0x00, 0x7E, 0x18, 0x18, 0x58, 0x30, 0x00], // U+03C4 (tau)
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+03C5 (upsilon)
    [0x00, 0x00, 0x76, 0xDB, 0xDB, 0x7E, 0x18, 0x00], // U+03C6 (phi)
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // U+03C7 (chi)
    [0x00, 0x00, 0xDB, 0xDB, 0xDB, 0x7E, 0x18, 0x00], // U+03C8 (psi)
    [0x00, 0x00, 0x36, 0x63, 0x6B, 0x7F, 0x36, 0x00], // U+03C9 (omega)
];
