/// 附加在每条消息末尾的哨兵字节序列。
/// 提取时扫描到它的首次出现即认为消息在此逻辑结束。
pub const SENTINEL: &str = "###END###";

/// 每个像素占用的字节数 (R, G, B, A 四个通道)。
/// 隐写只改写每组 4 字节中的第一个，即红色通道的最低有效位，
/// 因此缓冲区的比特容量等于它的像素数。
pub const BYTES_PER_PIXEL: usize = 4;

/// 单个字符占用的比特数。
/// 字符码点先截断为单字节 (0-255)，再按最高位在前展开为 8 bits。
pub const BITS_PER_CHAR: usize = 8;
