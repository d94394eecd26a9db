//! Inline string payloads inside formula token streams.
//!
//! BIFF8 stores `tStr` as a ShortXLUnicodeString: a `u8` character count,
//! a flags byte, optional rich-text and phonetic-extension headers, then
//! the characters as UTF-16LE or compressed 8-bit Latin-1 ([MS-XLS]
//! 2.5.240). Earlier generations store a length-prefixed byte string in
//! the workbook codepage.

use encoding_rs::Encoding;

const FLAG_HIGH_BYTE: u8 = 0x01;
const FLAG_EXT: u8 = 0x04;
const FLAG_RICH: u8 = 0x08;

/// Decode a BIFF8 short Unicode string starting at `pos`. Returns the
/// text and the position just past the payload, or `None` on truncation.
pub(crate) fn read_biff8_short_string(data: &[u8], pos: usize) -> Option<(String, usize)> {
    let nchars = *data.get(pos)? as usize;
    let options = *data.get(pos + 1)?;
    let mut pos = pos + 2;

    let mut rich_runs = 0usize;
    if options & FLAG_RICH != 0 {
        let raw = data.get(pos..pos + 2)?;
        rich_runs = u16::from_le_bytes([raw[0], raw[1]]) as usize;
        pos += 2;
    }
    let mut ext_size = 0usize;
    if options & FLAG_EXT != 0 {
        let raw = data.get(pos..pos + 4)?;
        ext_size = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) as usize;
        pos += 4;
    }

    let text = if options & FLAG_HIGH_BYTE != 0 {
        let raw = data.get(pos..pos + 2 * nchars)?;
        pos += 2 * nchars;
        let (cow, _had_errors) = encoding_rs::UTF_16LE.decode_without_bom_handling(raw);
        cow.into_owned()
    } else {
        let raw = data.get(pos..pos + nchars)?;
        pos += nchars;
        encoding_rs::mem::decode_latin1(raw).into_owned()
    };

    // Rich-text runs and the phonetic block trail the characters; the
    // formula text does not use them.
    pos = pos.checked_add(4 * rich_runs + ext_size)?;
    if pos > data.len() {
        return None;
    }
    Some((text, pos))
}

/// Decode a legacy (BIFF ≤ 7) byte string with a `u8` length prefix.
pub(crate) fn read_legacy_string(
    data: &[u8],
    pos: usize,
    encoding: &'static Encoding,
) -> Option<(String, usize)> {
    let nbytes = *data.get(pos)? as usize;
    let raw = data.get(pos + 1..pos + 1 + nbytes)?;
    let (cow, _, _had_errors) = encoding.decode(raw);
    Some((cow.into_owned(), pos + 1 + nbytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressed_biff8_string() {
        let mut data = vec![0xAAu8]; // leading junk; parse from pos 1
        data.extend_from_slice(&[3, 0x00]);
        data.extend_from_slice(b"abc");
        let (text, newpos) = read_biff8_short_string(&data, 1).unwrap();
        assert_eq!(text, "abc");
        assert_eq!(newpos, data.len());
    }

    #[test]
    fn utf16_biff8_string() {
        let mut data = vec![2u8, FLAG_HIGH_BYTE];
        data.extend_from_slice(&[0x41, 0x00, 0x3B, 0x04]); // "Aл"
        let (text, newpos) = read_biff8_short_string(&data, 0).unwrap();
        assert_eq!(text, "A\u{043B}");
        assert_eq!(newpos, data.len());
    }

    #[test]
    fn rich_and_ext_blocks_are_skipped() {
        let mut data = vec![2u8, FLAG_RICH | FLAG_EXT];
        data.extend_from_slice(&2u16.to_le_bytes()); // two rich runs
        data.extend_from_slice(&3u32.to_le_bytes()); // 3 ext bytes
        data.extend_from_slice(b"hi");
        data.extend_from_slice(&[0u8; 2 * 4 + 3]);
        let (text, newpos) = read_biff8_short_string(&data, 0).unwrap();
        assert_eq!(text, "hi");
        assert_eq!(newpos, data.len());
    }

    #[test]
    fn truncated_strings_are_rejected() {
        assert!(read_biff8_short_string(&[5, 0x00, b'a'], 0).is_none());
        assert!(read_legacy_string(&[4, b'a'], 0, encoding_rs::WINDOWS_1252).is_none());
    }

    #[test]
    fn legacy_codepage_string() {
        let data = [3u8, 0xE9, b't', 0xE9]; // "été" minus the first e
        let (text, newpos) = read_legacy_string(&data, 0, encoding_rs::WINDOWS_1252).unwrap();
        assert_eq!(text, "\u{e9}t\u{e9}");
        assert_eq!(newpos, 4);
    }
}
