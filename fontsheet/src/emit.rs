//! C source emission for an encoded font.

use std::fmt::{self, Write};

use crate::encode::{EncodedFont, EncodedGlyph};

/// Reference copy of the `font.h` declarations, kept disabled under `#if 0`.
const HEADER: &str = r#"#include "font.h"

#if 0
#ifndef FONT_H_
#define FONT_H_

typedef struct {
    unsigned char_width;
    unsigned char_height;
    const char * font_name;
    unsigned char first_char;
    unsigned char last_char;
    unsigned char * font_bitmap;
} font_t;

extern const font_t console_fonts[];

#endif /* FONT_H_ */
#endif
"#;

/// Render a glyph code for use inside a C string literal.
///
/// Printable ASCII is emitted as is, `"` is escaped, and everything else
/// becomes a three-digit octal escape.
pub fn printable_char(code: u8) -> String {
    match code {
        b'"' => "\\\"".to_string(),
        32..=126 => (code as char).to_string(),
        _ => format!("\\{code:03o}"),
    }
}

/// Write the complete C array for `font`.
pub fn write_c_source<W: Write>(out: &mut W, font: &EncodedFont) -> fmt::Result {
    let mode = font.mode.name();
    out.write_str(HEADER)?;
    write!(
        out,
        "\n/* {mode} mode: the array contains the {mode}s of the chars */\n\n"
    )?;
    writeln!(out, "unsigned char {}[] = {{", font.array_name())?;
    for glyph in &font.glyphs {
        write_glyph(out, glyph)?;
    }
    out.write_str("};\n\n")
}

fn write_glyph<W: Write>(out: &mut W, glyph: &EncodedGlyph) -> fmt::Result {
    write!(
        out,
        "\n    /*\n     * code={}, hex=0x{:02X}, ascii=\"{}\"\n     */\n",
        glyph.code,
        glyph.code,
        printable_char(glyph.code)
    )?;
    for line in &glyph.lines {
        out.write_str("    ")?;
        for byte in &line.bytes {
            write!(out, "0x{byte:02X},")?;
        }
        out.write_str("  /* ")?;
        for &bit in &line.bits {
            out.write_char(if bit { '1' } else { '0' })?;
        }
        out.write_str(" */\n")?;
    }
    Ok(())
}

/// Convenience wrapper around [`write_c_source`].
pub fn to_c_source(font: &EncodedFont) -> String {
    let mut out = String::new();
    write_c_source(&mut out, font).expect("writing to a String cannot fail");
    out
}
