//! 单词扫描示例
//!
//! 展示如何在 Parser 游标之上手写一个简单的扫描循环：
//! 先查询（is_next / next），再由调用方显式移动位置。

use parser_framework::{ElementParser, IgnoreAsciiCase, ParsableBuffer, Parser, ParserState};

#[derive(Debug)]
enum Word {
    Keyword(String),
    Ident(String),
    Number(String),
    Symbol(char),
}

const KEYWORDS: &[&str] = &["select", "from", "where"];

fn scan(input: &str) -> Vec<Word> {
    let text = ParsableBuffer::from(input).with_eq(IgnoreAsciiCase);
    let mut parser: Parser<_, ParserState> = Parser::new(text);
    let mut words = Vec::new();

    while !parser.is_eof() {
        // 跳过空白
        if parser.is_next_with(char::is_whitespace).unwrap_or(false) {
            parser.advance_by(1);
            continue;
        }

        // 关键字（大小写不敏感）
        if let Some(kw) = KEYWORDS.iter().find(|kw| {
            parser.is_next_seq(kw.chars())
                && !parser
                    .is_at_with(parser.position() + kw.len() as isize, char::is_alphanumeric)
                    .unwrap_or(false)
        }) {
            words.push(Word::Keyword(kw.to_string()));
            parser.advance_by(kw.len() as isize);
            continue;
        }

        let start = parser.position();
        let collect = |parser: &mut Parser<_, ParserState>, f: fn(char) -> bool| {
            while parser.is_next_with(f).unwrap_or(false) {
                parser.advance_by(1);
            }
            parser
                .substring(start, (parser.position() - start) as usize)
                .map(|s| s.collect::<String>())
                .unwrap_or_default()
        };

        if parser.is_next_with(|c| c.is_ascii_digit()).unwrap_or(false) {
            words.push(Word::Number(collect(&mut parser, |c| c.is_ascii_digit())));
        } else if parser.is_next_with(char::is_alphabetic).unwrap_or(false) {
            words.push(Word::Ident(collect(&mut parser, char::is_alphanumeric)));
        } else {
            if let Ok(ch) = parser.next() {
                words.push(Word::Symbol(ch));
            }
            parser.advance_by(1);
        }
    }

    words
}

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "SELECT name FROM users WHERE id = 42".to_string());

    println!("输入: {}", input);
    for word in scan(&input) {
        println!("  {:?}", word);
    }
}
