//! 歌词解析器模块

pub mod ttml_parser;
