//! 歌词处理器模块

pub mod side_channel_resolver;
pub mod text_renderer;
