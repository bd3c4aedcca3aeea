//! Reply Parsing
//!
//! Splits the raw completion text into attributed lines. Lines carrying a
//! `[Name]` tag go to that character; anything else falls back to the
//! addressed character, then to Nimbus. Blank lines are dropped, order is
//! preserved, and no line is ever left unattributed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{Character, GroupReply, ReplyLine, DEFAULT_CHARACTER};

static RE_SPEAKER_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.*?)\]\s*(.*)").expect("valid regex"));

/// Parse raw completion text into an attributed group reply.
pub fn parse_reply(raw: &str, addressed: Option<Character>) -> GroupReply {
    let fallback = addressed.unwrap_or(DEFAULT_CHARACTER);
    let mut lines = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = RE_SPEAKER_TAG.captures(line) {
            // Unknown tag names fall through to the fallback speaker so
            // attribution stays inside the herd.
            if let Some(speaker) = Character::from_tag(&caps[1]) {
                lines.push(ReplyLine {
                    speaker,
                    text: caps[2].to_string(),
                });
                continue;
            }
        }

        lines.push(ReplyLine {
            speaker: fallback,
            text: line.to_string(),
        });
    }

    GroupReply { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_lines_are_attributed() {
        let reply = parse_reply("[Nimbus] Hi there\n[o\u{35e}ki] Kawaii!\n", None);
        assert_eq!(
            reply.lines,
            vec![
                ReplyLine {
                    speaker: Character::Nimbus,
                    text: "Hi there".to_string(),
                },
                ReplyLine {
                    speaker: Character::Oki,
                    text: "Kawaii!".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let reply = parse_reply("[Nimbus] Hello\n\n   \n[Dr. Stoffels] Is it safe?", None);
        assert_eq!(reply.lines.len(), 2);
    }

    #[test]
    fn test_untagged_line_goes_to_addressed_pig() {
        let reply = parse_reply("just a line", Some(Character::DrStoffels));
        assert_eq!(reply.lines.len(), 1);
        assert_eq!(reply.lines[0].speaker, Character::DrStoffels);
        assert_eq!(reply.lines[0].text, "just a line");
    }

    #[test]
    fn test_untagged_line_defaults_to_nimbus() {
        let reply = parse_reply("just a line", None);
        assert_eq!(reply.lines[0].speaker, Character::Nimbus);
    }

    #[test]
    fn test_unknown_tag_falls_back() {
        let reply = parse_reply("[Bob] who am I?", Some(Character::Oki));
        assert_eq!(reply.lines[0].speaker, Character::Oki);
        assert_eq!(reply.lines[0].text, "[Bob] who am I?");
    }

    #[test]
    fn test_order_is_preserved() {
        let raw = "[o\u{35e}ki] one\n[Nimbus] two\n[o\u{35e}ki] three";
        let reply = parse_reply(raw, None);
        let texts: Vec<&str> = reply.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }
}
