//! # 比特编解码模块
//!
//! 定义字节与比特序列之间的共享约定：最高位在前 (MSB-first)。
//! 嵌入端与提取端都遵循本约定，它是一个协议而非有状态组件。

/// 将单个字节按最高位在前展开为 8 个比特 (每个元素为 0 或 1)。
pub fn byte_to_bits(byte: u8) -> [u8; 8] {
    std::array::from_fn(|i| (byte >> (7 - i)) & 1)
}

/// 将 8 个比特按最高位在前重组为一个字节。
pub fn bits_to_byte(bits: &[u8]) -> u8 {
    debug_assert_eq!(bits.len(), 8);
    bits.iter().fold(0, |byte, &bit| (byte << 1) | (bit & 1))
}

/// 将文本逐字符展开为比特序列，顺序与字符串一致。
/// 每个字符的码点截断为单字节 (0-255)；码点超过 255 的字符会丢失高位信息。
pub fn text_to_bits(text: &str) -> Vec<u8> {
    text.chars().flat_map(|ch| byte_to_bits(ch as u8)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 验证展开顺序为最高位在前
    #[test]
    fn byte_expands_msb_first() {
        // 0xA5 = 1010_0101
        assert_eq!(byte_to_bits(0xA5), [1, 0, 1, 0, 0, 1, 0, 1]);
        assert_eq!(byte_to_bits(0x00), [0; 8]);
        assert_eq!(byte_to_bits(0xFF), [1; 8]);
    }

    /// 验证字节展开与重组互为逆运算
    #[test]
    fn bits_reassemble_to_byte() {
        assert_eq!(bits_to_byte(&[1, 0, 1, 0, 0, 1, 0, 1]), 0xA5);
        for byte in [0u8, 1, 0x23, 0x80, 0xFE, 0xFF] {
            assert_eq!(bits_to_byte(&byte_to_bits(byte)), byte);
        }
    }

    /// 验证文本按字符串顺序逐字符展开
    #[test]
    fn text_expands_in_order() {
        // 'A' = 0x41, 'B' = 0x42
        assert_eq!(
            text_to_bits("AB"),
            vec![0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0]
        );
        assert!(text_to_bits("").is_empty());
    }

    /// 验证码点超过 255 的字符被截断为低 8 位
    #[test]
    fn wide_code_points_truncate() {
        // '€' = U+20AC，低 8 位为 0xAC
        assert_eq!(text_to_bits("€"), byte_to_bits(0xAC).to_vec());
        // 'é' = U+00E9，仍在单字节范围内
        assert_eq!(text_to_bits("é"), byte_to_bits(0xE9).to_vec());
    }
}
