/// 可绘制区域：主矩形和两个切角
pub mod region_model;

/// 把二值图像拆成一行一行的连续笔画
pub mod swipe_extractor;

/// 图像坐标到屏幕坐标的映射，以及越界裁剪
pub mod coordinate_mapper;

/// 把笔画变成 swipe 手势发给设备
pub mod gesture_dispatcher;

/// 通过人工二分查找标定屏幕的可绘制区域
pub mod calibration;

/// `config.default.toml` / `config.toml` 的读写
pub mod config;

/// 生成和可绘制区域等大的空白模板图
pub mod template;

/// 从图片到设备的完整绘制流程
pub mod pipeline;

// 整体流程: 图片 -> `swipe_extractor` -> `coordinate_mapper` -> `gesture_dispatcher` -> adb
// 标定: `calibration` 画探测线 -> 人回答 y/n/r/s -> 缩小区间 -> 写回 `config`

// 设备一次只能处理一条触摸流，所以所有手势都是串行发出的，中间没有并发

pub use calibration::{CalibrationHints, Calibrator};
pub use config::{ConfigStore, Profile};
pub use coordinate_mapper::{Mapper, Placement, Segment};
pub use gesture_dispatcher::{Dispatcher, SwipeDevice, Timing};
pub use pipeline::{DrawReport, extract_and_draw};
pub use region_model::Region;
pub use swipe_extractor::{BinaryRaster, Run};
