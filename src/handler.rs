//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责协调图像文件的解码与编码、调用核心隐写算法以及向用户报告结果。

use crate::cli::{ExtractArgs, HideArgs};
use crate::constants::{BITS_PER_CHAR, SENTINEL};
use crate::steganography::{capacity_bits, embed, extract, fits};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 在输出文件已存在且未指定 `--force` 时拒绝写入。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 根据输入图像路径生成默认输出路径：同目录、加前缀、换扩展名。
fn default_output(image: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_owned());
    image.with_file_name(format!("{prefix}{stem}.{extension}"))
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责解码输入图像、读取待隐藏文本、检查隐写容量是否足够、
/// 调用核心函数把消息写入红色通道，最后把结果保存为目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与载荷来源的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件，或无法读取文本文件。
/// * 图像容量不足以容纳消息与结束标记。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法把结果图像写入目标路径。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = match (args.message, args.text) {
        (Some(message), _) => message,
        (None, Some(path)) => fs::read_to_string(&path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        })?,
        (None, None) => anyhow::bail!("Either --text or --message must be provided."),
    };

    let mut pixels = picture.to_rgba8();

    let required_bits = (message.chars().count() + SENTINEL.len()) * BITS_PER_CHAR;
    let available_bits = capacity_bits(pixels.as_raw());

    anyhow::ensure!(
        fits(pixels.as_raw(), &message),
        "Not enough space in the image to hide the text. \nRequired: {} bits, Available: {} bits",
        required_bits.to_string().red().bold(),
        available_bits.to_string().green().bold()
    );

    let dest = args
        .dest
        .unwrap_or_else(|| default_output(&args.image, "encoded_", "png"));
    ensure_writable(&dest, args.force)?;

    embed(&mut pixels, &message).context(
        "Failed to hide the message in the image data. \nThe decoded pixel buffer has an unexpected shape.",
    )?;

    pixels.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 负责解码输入图像、调用核心函数扫描红色通道并寻找结束标记，
/// 找到消息时将其写入目标文本文件，否则向用户报告未找到。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `ExtractArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法把提取的文本写入目标路径。
///
/// 图像中找不到隐藏消息不是错误：此时只打印提示并正常返回。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let pixels = picture.to_rgba8();

    let recovered = extract(pixels.as_raw()).context(
        "Failed to scan the image for a hidden message. \nThe decoded pixel buffer has an unexpected shape.",
    )?;

    let Some(message) = recovered else {
        println!(
            "{}",
            "No hidden message found or message corrupted.".red().bold()
        );
        return Ok(());
    };

    let text_path = args
        .text
        .unwrap_or_else(|| default_output(&args.image, "extracted_", "txt"));
    ensure_writable(&text_path, args.force)?;

    fs::write(&text_path, &message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text_path.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully extracted and saved: {}",
        text_path.to_string_lossy().green().bold()
    );

    Ok(())
}
