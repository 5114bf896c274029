//! # 镜像列表解析器
//!
//! 解析 `images --format '{{.Repository}}:{{.Tag}}|{{.ID}}|{{.Size}}'` 的输出。
//!
//! ## 格式
//! - 每行一个镜像，`|` 分隔三列
//! - 列数不为 3 的行忽略
//! - `<none>:<none>` 悬空镜像忽略
//!
//! ## 依赖关系
//! - 被 `engine/cli.rs` 使用
//! - 使用 `csv` + `serde` 反序列化

use crate::error::Result;
use crate::models::ImageRef;

/// 传给引擎的列表格式模板
pub const IMAGE_LIST_FORMAT: &str = "{{.Repository}}:{{.Tag}}|{{.ID}}|{{.Size}}";

const FIELD_COUNT: usize = 3;

/// 解析镜像列表输出
pub fn parse_image_listing(text: &str) -> Result<Vec<ImageRef>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut images = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != FIELD_COUNT {
            continue;
        }

        let image: ImageRef = record.deserialize(None)?;
        if image.is_dangling() {
            continue;
        }
        images.push(image);
    }

    Ok(images)
}
