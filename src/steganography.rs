//! # 隐写核心模块
//!
//! 在 RGBA 像素缓冲区的红色通道最低有效位中写入与读取消息。
//! 有效载荷为消息加上 [`SENTINEL`]；超出缓冲区容量的比特会被静默丢弃，
//! 被截断的图像在提取时可能找不到哨兵而报告无消息，
//! 调用方可先通过 [`fits`] 判断容量是否足够。

use crate::bitcodec::{bits_to_byte, text_to_bits};
use crate::constants::{BITS_PER_CHAR, BYTES_PER_PIXEL, SENTINEL};
use std::io::{self, ErrorKind};

fn check_shape(pix: &[u8]) -> io::Result<()> {
    if pix.is_empty() || pix.len() % BYTES_PER_PIXEL != 0 {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "The pixel buffer length is not a positive multiple of 4 (RGBA).",
        ));
    }
    Ok(())
}

/// 缓冲区可容纳的比特数，等于它的像素数。
pub fn capacity_bits(pix: &[u8]) -> usize {
    pix.len() / BYTES_PER_PIXEL
}

/// 判断消息与哨兵能否完整写入缓冲区而不被截断。
pub fn fits(pix: &[u8], message: &str) -> bool {
    (message.chars().count() + SENTINEL.len()) * BITS_PER_CHAR <= capacity_bits(pix)
}

pub fn embed(pix: &mut [u8], message: &str) -> io::Result<()> {
    check_shape(pix)?;

    let payload = format!("{message}{SENTINEL}");
    let bits = text_to_bits(&payload);

    for (red, bit) in pix.iter_mut().step_by(BYTES_PER_PIXEL).zip(bits) {
        *red = (*red & 0xFE) | bit;
    }

    Ok(())
}

pub fn extract(pix: &[u8]) -> io::Result<Option<String>> {
    check_shape(pix)?;

    let lsbs: Vec<u8> = pix
        .iter()
        .step_by(BYTES_PER_PIXEL)
        .map(|byte| byte & 1)
        .collect();

    let mut text = String::new();
    for bits in lsbs.chunks_exact(BITS_PER_CHAR) {
        let byte = bits_to_byte(bits);
        // 字节值 0 是显式的终止标记，合法消息中不可能出现
        if byte == 0 {
            break;
        }
        text.push(char::from(byte));
    }

    Ok(text.find(SENTINEL).map(|end| text[..end].to_owned()))
}
