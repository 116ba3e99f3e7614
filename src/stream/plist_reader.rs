use crate::entry::SearchEntry;
use crate::error::Error;
use indexmap::IndexMap;
use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::combinator::{all_consuming, map, value};
use nom::sequence::delimited;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Lines ahead of the first entry key: xml declaration, doctype, `<plist>`,
/// the top-level `<dict>` and the key of the web search dictionary.
pub const HEADER_LINES: usize = 5;
// the `<dict>` opener after each entry key
pub const KEY_DICT_LINES: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Key(String),
    DictOpen,
    EmptyDict,
    DictClose,
    Str(String),
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub token: Token,
}

pub struct PlistReader {}
impl PlistReader {
    fn parse_key(input: &str) -> IResult<&str, &str> {
        all_consuming(delimited(tag("<key>"), take_until("</key>"), tag("</key>"))).parse(input)
    }
    fn parse_string(input: &str) -> IResult<&str, String> {
        all_consuming(alt((
            value(String::new(), tag("<string/>")),
            map(
                delimited(tag("<string>"), take_until("</string>"), tag("</string>")),
                |s: &str| s.to_string(),
            ),
        )))
        .parse(input)
    }
    fn parse_dict(input: &str) -> IResult<&str, Token> {
        alt((
            value(Token::DictOpen, tag("<dict>")),
            value(Token::EmptyDict, tag("<dict/>")),
            value(Token::DictClose, tag("</dict>")),
        ))
        .parse(input)
    }

    fn lex(number: usize, raw: &str) -> Result<Token, Error> {
        let line = raw.trim();
        if line.starts_with("<key>") {
            return match Self::parse_key(line) {
                Ok((_, name)) => Ok(Token::Key(name.to_string())),
                Err(_) => Err(Error::MalformedKey {
                    line: number,
                    text: line.to_string(),
                }),
            };
        }
        if line.starts_with("<string") {
            return Ok(match Self::parse_string(line) {
                Ok((_, value)) => Token::Str(value),
                Err(_) => {
                    warn!(line = number, text = line, "unrecognized string value, skipped");
                    Token::Other
                }
            });
        }
        Ok(Self::parse_dict(line)
            .map(|(_, token)| token)
            .unwrap_or(Token::Other))
    }

    pub fn tokenize(input: &str) -> Result<Vec<Line>, Error> {
        let mut lines = input.lines().enumerate();
        let header: Vec<&str> = lines.by_ref().take(HEADER_LINES).map(|(_, l)| l).collect();
        if !header.is_empty() && !header.iter().any(|l| l.trim_start().starts_with("<plist")) {
            warn!("no <plist> tag in the first {HEADER_LINES} lines, entries may be misread");
        }
        lines
            .map(|(index, raw)| {
                Self::lex(index + 1, raw).map(|token| Line {
                    number: index + 1,
                    token,
                })
            })
            .collect()
    }

    pub fn read_entries(lines: Vec<Line>) -> Result<Vec<SearchEntry>, Error> {
        let mut lines = lines.into_iter();
        let mut entries = vec![];
        while let Some(line) = lines.next() {
            let Token::Key(key) = line.token else {
                continue;
            };
            if key.is_empty() {
                return Err(Error::MalformedKey {
                    line: line.number,
                    text: "<key></key>".to_string(),
                });
            }
            let opener = lines.by_ref().take(KEY_DICT_LINES).last();
            match opener.map(|l| l.token) {
                Some(Token::DictOpen) => {
                    entries.push(Self::read_entry(key, line.number, &mut lines)?);
                }
                Some(Token::EmptyDict) => entries.push(SearchEntry::new(key)),
                Some(_) => debug!(key = %key, line = line.number, "key does not open a dictionary"),
                None => {
                    return Err(Error::UnterminatedEntry {
                        key,
                        line: line.number,
                    });
                }
            }
        }
        Ok(entries)
    }

    fn read_entry(
        key: String,
        opened_at: usize,
        lines: &mut impl Iterator<Item = Line>,
    ) -> Result<SearchEntry, Error> {
        let unterminated = || Error::UnterminatedEntry {
            key: key.clone(),
            line: opened_at,
        };
        let mut properties = IndexMap::new();
        loop {
            let line = lines.next().ok_or_else(unterminated)?;
            let property = match line.token {
                Token::Key(property) => property,
                Token::DictClose => break,
                _ => continue,
            };
            let value = lines.next().ok_or_else(unterminated)?;
            match value.token {
                Token::Str(value) => {
                    properties.insert(property, value);
                }
                Token::DictOpen => Self::skip_dict(lines).ok_or_else(unterminated)?,
                Token::DictClose => break,
                _ => {}
            }
        }
        Ok(SearchEntry::from_properties(key, properties))
    }

    /// Consumes a nested dictionary up to and including its closing tag.
    fn skip_dict(lines: &mut impl Iterator<Item = Line>) -> Option<()> {
        let mut depth = 1usize;
        while depth > 0 {
            match lines.next()?.token {
                Token::DictOpen => depth += 1,
                Token::DictClose => depth -= 1,
                _ => {}
            }
        }
        Some(())
    }

    pub fn parse(input: &[u8]) -> Result<Vec<SearchEntry>, Error> {
        let input = String::from_utf8_lossy(input);
        let lines = Self::tokenize(&input)?;
        Self::read_entries(lines)
    }

    pub fn from_path(path: &Path) -> Result<Vec<SearchEntry>, Error> {
        let data = fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data)
    }
}
