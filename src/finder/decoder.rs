use crate::finder::config::EncodingKind;
use encoding_rs::{UTF_16BE, UTF_16LE, UTF_8};

const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// 按指定编码把字节解码为文本，遇到非法序列时替换而不是报错
pub fn decode(bytes: &[u8], encoding: EncodingKind) -> String {
    match encoding {
        EncodingKind::Ascii => decode_ascii(bytes),
        // 默认编码会识别 BOM，没有 BOM 时按 UTF-8 处理
        EncodingKind::SystemDefault => UTF_8.decode(bytes).0.into_owned(),
        EncodingKind::Utf8 => UTF_8.decode_without_bom_handling(bytes).0.into_owned(),
        EncodingKind::LittleEndianUtf16 => {
            UTF_16LE.decode_without_bom_handling(bytes).0.into_owned()
        }
        EncodingKind::BigEndianUtf16 => {
            UTF_16BE.decode_without_bom_handling(bytes).0.into_owned()
        }
        EncodingKind::Utf32 => decode_utf32le(bytes),
        EncodingKind::Utf7 => decode_utf7(bytes),
    }
}

/// 7 位 ASCII，高位字节替换为 '?'
fn decode_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}

fn decode_utf32le(bytes: &[u8]) -> String {
    let chunks = bytes.chunks_exact(4);
    let tail = chunks.remainder();
    let mut text: String = chunks
        .map(|c| {
            let value = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
            char::from_u32(value).unwrap_or(REPLACEMENT)
        })
        .collect();
    if !tail.is_empty() {
        text.push(REPLACEMENT);
    }
    text
}

fn base64_value(b: u8) -> Option<u8> {
    match b {
        b'A'..=b'Z' => Some(b - b'A'),
        b'a'..=b'z' => Some(b - b'a' + 26),
        b'0'..=b'9' => Some(b - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// UTF-7 (RFC 2152)：'+' 开启 base64 段，内容为 UTF-16BE 码元
fn decode_utf7(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut units: Vec<u16> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        i += 1;

        if b != b'+' {
            text.push(if b.is_ascii() { b as char } else { REPLACEMENT });
            continue;
        }

        // "+-" 表示字面量 '+'
        if bytes.get(i) == Some(&b'-') {
            text.push('+');
            i += 1;
            continue;
        }

        let mut bits: u32 = 0;
        let mut bit_count = 0;
        while let Some(value) = bytes.get(i).copied().and_then(base64_value) {
            bits = (bits << 6) | u32::from(value);
            bit_count += 6;
            if bit_count >= 16 {
                bit_count -= 16;
                units.push((bits >> bit_count) as u16);
                bits &= (1 << bit_count) - 1;
            }
            i += 1;
        }

        text.extend(char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(REPLACEMENT)));

        // 结束符 '-' 被吸收，其他字符照常输出
        if bytes.get(i) == Some(&b'-') {
            i += 1;
        }
    }

    text
}
