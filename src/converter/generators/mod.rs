//! 歌词生成器模块

pub mod lrc_generator;
pub mod plain_text_generator;
pub mod syllable_lrc_generator;
